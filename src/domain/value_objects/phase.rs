//! Pipeline phases

use serde::Serialize;

/// One phase of the pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Stage,
    Optimize,
    Rewrite,
    Publish,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Stage, Phase::Optimize, Phase::Rewrite, Phase::Publish];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Stage => "stage",
            Phase::Optimize => "optimize",
            Phase::Rewrite => "rewrite",
            Phase::Publish => "publish",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::fmt;

/// The stages of one analysis run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Classification,
    RingGeometry,
    LonePairs,
    Scanning,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Classification => "Classifying residues",
            Phase::RingGeometry => "Computing ring midpoints",
            Phase::LonePairs => "Estimating lone pairs",
            Phase::Scanning => "Scanning for interactions",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart(Phase),
    PhaseFinish { phase: Phase, produced: usize },

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

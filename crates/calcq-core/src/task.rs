//! Task and TaskResult types.

use serde::{Deserialize, Serialize};

/// The kind of computation a [`Task`] requests.
///
/// Each kind maps to one pure double-precision function of the task
/// operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    /// `sin(x)`.
    Sine,
    /// `sqrt(x)`. A negative operand yields NaN, which is carried through
    /// to the log rather than treated as fatal.
    SquareRoot,
    /// `x^y`.
    Power,
}

impl TaskKind {
    /// Evaluate this kind's function on the given operands.
    ///
    /// `y` is ignored for `Sine` and `SquareRoot`.
    pub fn apply(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Sine => x.sin(),
            Self::SquareRoot => x.sqrt(),
            Self::Power => x.powf(y),
        }
    }

    /// The name used in persisted log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sine => "Sin",
            Self::SquareRoot => "Sqrt",
            Self::Power => "Pow",
        }
    }

    /// Inverse of [`TaskKind::name`], used by the log parser.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Sin" => Some(Self::Sine),
            "Sqrt" => Some(Self::SquareRoot),
            "Pow" => Some(Self::Power),
            _ => None,
        }
    }

    /// Whether log lines for this kind carry the exponent operand.
    pub fn uses_exponent(&self) -> bool {
        matches!(self, Self::Power)
    }
}

/// One unit of work: a kind plus its operands.
///
/// Immutable once created. `y` is meaningful only for `Power` but is
/// carried for every kind so queue entries are uniform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Which function to evaluate.
    pub kind: TaskKind,
    /// First operand.
    pub x: f64,
    /// Second operand (exponent); ignored unless `kind` is `Power`.
    pub y: f64,
}

impl Task {
    /// Create a new Task.
    pub fn new(kind: TaskKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }
}

/// The outcome of evaluating one [`Task`].
///
/// Carries the operands alongside the value so the persisted log can be
/// re-validated without any other state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Kind of the task that produced this result.
    pub kind: TaskKind,
    /// Computed value.
    pub value: f64,
    /// First operand of the task.
    pub x: f64,
    /// Second operand of the task.
    pub y: f64,
}

impl TaskResult {
    /// Evaluate a task. This is the only way a result is produced, so
    /// `value` is always the pure function of the recorded operands.
    pub fn compute(task: &Task) -> Self {
        Self {
            kind: task.kind,
            value: task.kind.apply(task.x, task.y),
            x: task.x,
            y: task.y,
        }
    }
}

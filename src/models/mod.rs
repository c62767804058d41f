//! Simulation domain models.
//!
//! Provides the data types shared by the dispatching policies, the
//! simulator and its consumers.
//!
//! | Type | Role |
//! |------|------|
//! | [`ProcessSpec`] | Caller input describing one job |
//! | [`Process`] | Job record mutated by the simulator |
//! | [`GanttInterval`] / [`Timeline`] | CPU occupancy over time |
//! | [`SimulationStep`] | Immutable per-tick snapshot |

mod process;
mod step;
mod timeline;

pub use process::{Process, ProcessSpec, ProcessState, StateTransition, Tick};
pub use step::SimulationStep;
pub use timeline::{GanttInterval, Timeline};

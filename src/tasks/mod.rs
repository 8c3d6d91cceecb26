//! The five station tasks.
//!
//! | Task          | Input            | Output                 | Latching |
//! |---------------|------------------|------------------------|----------|
//! | `acquisition` | SampleSource     | all four queues        | n/a      |
//! | `display`     | display queue    | TextDisplay            | no       |
//! | `indicator`   | indicator queue  | AlertIndicator         | no       |
//! | `buzzer`      | buzzer queue     | Buzzer                 | yes      |
//! | `matrix`      | matrix queue     | PictogramMatrix        | yes      |
//!
//! Every task is an `async` loop with a `cycle`/`advance` method that
//! performs exactly one iteration, so tests can step a task without
//! running it forever.

pub mod acquisition;
pub mod buzzer;
pub mod display;
pub mod indicator;
pub mod latch;
pub mod matrix;

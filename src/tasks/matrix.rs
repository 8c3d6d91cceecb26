//! LED-matrix consumer: warning pictogram per pulse while latched.

use crate::app::ports::{EventSink, Pause, PictogramMatrix};
use crate::channels::{ConsumerId, SampleReceiver};
use crate::drivers::led_matrix::Rgb;
use crate::fsm::Drive;
use crate::fsm::pulse::PulsePattern;

use super::latch::{LatchTask, PulseOutput};

pub const MATRIX_SIDE: usize = 5;
pub const MATRIX_CELLS: usize = MATRIX_SIDE * MATRIX_SIDE;

/// Lit cells of a 5x5 frame, row-major, top row first.
pub type Pictogram = [bool; MATRIX_CELLS];

const fn row(bits: u8) -> [bool; MATRIX_SIDE] {
    [
        bits & 0b10000 != 0,
        bits & 0b01000 != 0,
        bits & 0b00100 != 0,
        bits & 0b00010 != 0,
        bits & 0b00001 != 0,
    ]
}

const fn rows(r: [u8; MATRIX_SIDE]) -> Pictogram {
    let mut out = [false; MATRIX_CELLS];
    let mut y = 0;
    while y < MATRIX_SIDE {
        let cells = row(r[y]);
        let mut x = 0;
        while x < MATRIX_SIDE {
            out[y * MATRIX_SIDE + x] = cells[x];
            x += 1;
        }
        y += 1;
    }
    out
}

/// Downward-pointing warning mark.
pub const ALERT_PICTOGRAM: Pictogram = rows([
    0b00000,
    0b11111,
    0b01010,
    0b00100,
    0b00000,
]);

/// Adapts a [`PictogramMatrix`]: `On` shows the pictogram, `Off` blanks.
pub struct MatrixPulse<M> {
    matrix: M,
    colour: Rgb,
}

impl<M: PictogramMatrix> MatrixPulse<M> {
    pub fn new(matrix: M, colour: Rgb) -> Self {
        Self { matrix, colour }
    }

    pub fn inner(&self) -> &M {
        &self.matrix
    }
}

impl<M: PictogramMatrix> PulseOutput for MatrixPulse<M> {
    fn drive(&mut self, level: Drive) {
        match level {
            Drive::On => self.matrix.show(&ALERT_PICTOGRAM, self.colour),
            Drive::Off => self.matrix.blank(),
        }
    }
}

pub type MatrixTask<'a, M, P, E> = LatchTask<'a, MatrixPulse<M>, P, E>;

pub fn matrix_task<'a, M: PictogramMatrix, P: Pause, E: EventSink>(
    rx: SampleReceiver<'a>,
    matrix: M,
    colour: Rgb,
    pattern: PulsePattern,
    pause: P,
    sink: E,
) -> MatrixTask<'a, M, P, E> {
    LatchTask::new(
        ConsumerId::Matrix,
        rx,
        pattern,
        MatrixPulse::new(matrix, colour),
        pause,
        sink,
    )
}

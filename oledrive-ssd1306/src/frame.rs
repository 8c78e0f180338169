//! Command frames and the bring-up table
//!
//! Each frame is one complete I2C write: the command-stream control byte
//! followed by an opcode and its parameters. The bring-up sequence is a
//! fixed table so the session just walks it front to back.

use crate::cmd::{self, control, HEIGHT, PAGES, WIDTH};

/// Number of frames in [`INIT_SEQUENCE`]
pub const INIT_FRAME_COUNT: usize = 16;

/// Settle time after Display ON before pixel data may be written
pub const STABILIZE_DELAY_MS: u32 = 200;

const MUX_RATIO: u8 = (HEIGHT - 1) as u8;
const LAST_COLUMN: u8 = (WIDTH - 1) as u8;
const LAST_PAGE: u8 = (PAGES - 1) as u8;

/// One controller instruction as sent on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandFrame {
    bytes: &'static [u8],
}

impl CommandFrame {
    /// Create a frame from its raw bytes
    ///
    /// Panics (at compile time for `const` tables) unless the frame holds a
    /// command-stream control byte and an opcode.
    pub const fn new(bytes: &'static [u8]) -> Self {
        assert!(
            bytes.len() >= 2 && bytes[0] == control::CMD_STREAM,
            "command frame must be 0x00 followed by an opcode"
        );
        Self { bytes }
    }

    /// Full frame including the control byte
    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Command opcode
    pub const fn opcode(&self) -> u8 {
        self.bytes[1]
    }

    /// Parameter bytes following the opcode
    pub fn params(&self) -> &'static [u8] {
        &self.bytes[2..]
    }
}

/// Logical steps of the bring-up sequence, in transmission order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    DisplayOff,
    MultiplexRatio,
    DisplayOffset,
    StartLine,
    SegmentRemap,
    ComScanDirection,
    ComPins,
    Contrast,
    DeactivateScroll,
    ResumeRamDisplay,
    ClockDivide,
    ChargePump,
    AddressingMode,
    ColumnRange,
    PageRange,
    DisplayOn,
}

/// A bring-up step and the frame that performs it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitCommand {
    pub step: InitStep,
    pub frame: CommandFrame,
}

const fn step(step: InitStep, bytes: &'static [u8]) -> InitCommand {
    InitCommand {
        step,
        frame: CommandFrame::new(bytes),
    }
}

/// SSD1306 128x64 bring-up sequence
///
/// Charge pump, addressing mode and the column/page window must all land
/// before Display ON or the panel comes up blank or garbled.
pub const INIT_SEQUENCE: [InitCommand; INIT_FRAME_COUNT] = [
    step(InitStep::DisplayOff, &[control::CMD_STREAM, cmd::DISPLAY_OFF]),
    step(
        InitStep::MultiplexRatio,
        &[control::CMD_STREAM, cmd::SET_MUX_RATIO, MUX_RATIO],
    ),
    step(
        InitStep::DisplayOffset,
        &[control::CMD_STREAM, cmd::SET_DISPLAY_OFFSET, 0x00],
    ),
    step(InitStep::StartLine, &[control::CMD_STREAM, cmd::SET_START_LINE]),
    step(InitStep::SegmentRemap, &[control::CMD_STREAM, cmd::SET_SEG_REMAP]),
    step(
        InitStep::ComScanDirection,
        &[control::CMD_STREAM, cmd::SET_COM_SCAN_DEC],
    ),
    step(
        InitStep::ComPins,
        &[control::CMD_STREAM, cmd::SET_COM_PINS, 0x12],
    ),
    step(
        InitStep::Contrast,
        &[control::CMD_STREAM, cmd::SET_CONTRAST, 0x7F],
    ),
    step(
        InitStep::DeactivateScroll,
        &[control::CMD_STREAM, cmd::DEACTIVATE_SCROLL],
    ),
    step(
        InitStep::ResumeRamDisplay,
        &[control::CMD_STREAM, cmd::RESUME_RAM_CONTENT_DISPLAY],
    ),
    step(
        InitStep::ClockDivide,
        &[control::CMD_STREAM, cmd::SET_CLOCK_DIV, 0x00],
    ),
    step(
        InitStep::ChargePump,
        &[control::CMD_STREAM, cmd::SET_CHARGE_PUMP, 0x14],
    ),
    step(
        InitStep::AddressingMode,
        &[
            control::CMD_STREAM,
            cmd::SET_MEMORY_ADDR_MODE,
            cmd::ADDR_MODE_HORIZONTAL,
        ],
    ),
    step(
        InitStep::ColumnRange,
        &[control::CMD_STREAM, cmd::SET_COLUMN_ADDR, 0x00, LAST_COLUMN],
    ),
    step(
        InitStep::PageRange,
        &[control::CMD_STREAM, cmd::SET_PAGE_ADDR, 0x00, LAST_PAGE],
    ),
    step(InitStep::DisplayOn, &[control::CMD_STREAM, cmd::DISPLAY_ON]),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn position(target: InitStep) -> usize {
        INIT_SEQUENCE
            .iter()
            .position(|c| c.step == target)
            .unwrap()
    }

    #[test]
    fn test_sequence_bytes() {
        let expected: [&[u8]; INIT_FRAME_COUNT] = [
            &[0x00, 0xAE],
            &[0x00, 0xA8, 0x3F],
            &[0x00, 0xD3, 0x00],
            &[0x00, 0x40],
            &[0x00, 0xA1],
            &[0x00, 0xC8],
            &[0x00, 0xDA, 0x12],
            &[0x00, 0x81, 0x7F],
            &[0x00, 0x2E],
            &[0x00, 0xA4],
            &[0x00, 0xD5, 0x00],
            &[0x00, 0x8D, 0x14],
            &[0x00, 0x20, 0x00],
            &[0x00, 0x21, 0x00, 0x7F],
            &[0x00, 0x22, 0x00, 0x07],
            &[0x00, 0xAF],
        ];

        for (command, bytes) in INIT_SEQUENCE.iter().zip(expected.iter()) {
            assert_eq!(command.frame.as_bytes(), *bytes, "{:?}", command.step);
        }
    }

    #[test]
    fn test_every_frame_is_command_stream() {
        for command in INIT_SEQUENCE.iter() {
            let first = command.frame.as_bytes()[0];
            assert_eq!(first, control::CMD_STREAM);
            assert_ne!(first, control::CMD_SINGLE);
            assert_ne!(first, control::DATA_STREAM);
        }
    }

    #[test]
    fn test_steps_are_unique() {
        for (i, a) in INIT_SEQUENCE.iter().enumerate() {
            for b in INIT_SEQUENCE.iter().skip(i + 1) {
                assert_ne!(a.step, b.step);
            }
        }
    }

    #[test]
    fn test_display_on_is_last() {
        assert_eq!(position(InitStep::DisplayOff), 0);
        assert_eq!(position(InitStep::DisplayOn), INIT_FRAME_COUNT - 1);
    }

    #[test]
    fn test_setup_precedes_display_on() {
        let on = position(InitStep::DisplayOn);
        assert!(position(InitStep::ChargePump) < on);
        assert!(position(InitStep::AddressingMode) < on);
        assert!(position(InitStep::ColumnRange) < on);
        assert!(position(InitStep::PageRange) < on);
    }

    #[test]
    fn test_frame_accessors() {
        let column = INIT_SEQUENCE[position(InitStep::ColumnRange)].frame;
        assert_eq!(column.opcode(), cmd::SET_COLUMN_ADDR);
        assert_eq!(column.params(), &[0x00, 0x7F]);

        let off = INIT_SEQUENCE[0].frame;
        assert_eq!(off.opcode(), cmd::DISPLAY_OFF);
        assert!(off.params().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_frame_without_control_byte_rejected() {
        let _ = CommandFrame::new(&[0x40, 0xAF]);
    }
}

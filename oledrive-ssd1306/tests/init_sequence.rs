//! Bring-up properties checked against a recording bus

use std::cell::RefCell;

use embedded_hal::delay::DelayNs;
use oledrive_hal::I2cBus;
use oledrive_ssd1306::frame::{INIT_FRAME_COUNT, STABILIZE_DELAY_MS};
use oledrive_ssd1306::{ControllerSession, DrawColor, Error, INIT_SEQUENCE};
use proptest::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Write(Vec<u8>),
    Delay(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Nack;

struct RecordingBus<'a> {
    log: &'a RefCell<Vec<Event>>,
    fail_on: Option<usize>,
    attempts: usize,
}

impl I2cBus for RecordingBus<'_> {
    type Error = Nack;

    fn write(&mut self, _address: u8, data: &[u8]) -> Result<(), Nack> {
        self.attempts += 1;
        if self.fail_on == Some(self.attempts) {
            return Err(Nack);
        }
        self.log.borrow_mut().push(Event::Write(data.to_vec()));
        Ok(())
    }

    fn probe(&mut self, _address: u8) -> Result<bool, Nack> {
        Ok(true)
    }
}

struct RecordingDelay<'a> {
    log: &'a RefCell<Vec<Event>>,
}

impl DelayNs for RecordingDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

fn color(on: bool) -> DrawColor {
    if on {
        DrawColor::On
    } else {
        DrawColor::Off
    }
}

#[test]
fn full_sequence_matches_table() {
    let log = RefCell::new(Vec::new());
    let bus = RecordingBus {
        log: &log,
        fail_on: None,
        attempts: 0,
    };
    let mut oled = ControllerSession::with_defaults(bus);
    oled.initialize(&mut RecordingDelay { log: &log }).unwrap();

    let mut expected: Vec<Event> = INIT_SEQUENCE
        .iter()
        .map(|c| Event::Write(c.frame.as_bytes().to_vec()))
        .collect();
    expected.push(Event::Delay(STABILIZE_DELAY_MS));

    assert_eq!(log.into_inner(), expected);
}

proptest! {
    #[test]
    fn failure_stops_at_failed_frame(n in 1..=INIT_FRAME_COUNT) {
        let log = RefCell::new(Vec::new());
        let bus = RecordingBus { log: &log, fail_on: Some(n), attempts: 0 };
        let mut oled = ControllerSession::with_defaults(bus);

        let result = oled.initialize(&mut RecordingDelay { log: &log });

        prop_assert_eq!(
            result,
            Err(Error::Transport { step: INIT_SEQUENCE[n - 1].step, source: Nack })
        );
        prop_assert_eq!(oled.release().attempts, n);

        let log = log.into_inner();
        prop_assert_eq!(log.len(), n - 1);
        prop_assert!(log.iter().all(|e| matches!(e, Event::Write(_))));
    }

    #[test]
    fn presentation_fields_survive_operations(
        address in 0u8..=0x7F,
        on in any::<bool>(),
        scale in any::<u8>(),
    ) {
        let log = RefCell::new(Vec::new());
        let bus = RecordingBus { log: &log, fail_on: None, attempts: 0 };
        let mut oled = ControllerSession::new(bus, address, color(on), scale);

        oled.initialize(&mut RecordingDelay { log: &log }).unwrap();
        prop_assert!(oled.is_ready().unwrap());

        prop_assert_eq!(oled.address(), address);
        prop_assert_eq!(oled.draw_color, color(on));
        prop_assert_eq!(oled.font_scale, scale);
    }
}

//! Basic blind control example.
//!
//! Drives a simulated blind from a TOML configuration, printing relay pulses
//! and status updates as the position estimate converges.
//!
//! This example uses console-printing pins for running without real hardware.

use std::time::Duration;

use blinds_motion::{
    parse_config, BlindController, MotionState, Percent, PinActuator, Reporter, StdClock,
};

const CONFIG: &str = r#"
[blinds.demo]
name = "Demo Blind"
up_pin = 17
down_pin = 27
stop_pin = 22
preset_position = 40
motion_time_ms = 3000
motion_lag_ms = 150
pulse_ms = 100
"#;

/// Output pin that prints its level changes.
struct ConsolePin {
    label: &'static str,
}

impl embedded_hal::digital::ErrorType for ConsolePin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for ConsolePin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        println!("  [{}] high", self.label);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        println!("  [{}] low", self.label);
        Ok(())
    }
}

/// Reporter that prints status updates.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn position(&mut self, position: Percent) {
        println!("  position -> {}", position);
    }

    fn state(&mut self, state: MotionState) {
        println!("  state -> {} (code {})", state, state.code());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Basic Blind Control Example ===\n");

    let config = parse_config(CONFIG)?;
    let blind_config = config.blind("demo").ok_or("demo blind missing")?;

    println!("Releasing relays:");
    let actuator = PinActuator::from_config(
        blind_config,
        ConsolePin { label: "up" },
        ConsolePin { label: "down" },
        ConsolePin { label: "stop" },
    )?;

    let mut blind = BlindController::builder()
        .from_blind_config(blind_config)
        .actuator(actuator)
        .clock(StdClock::new())
        .reporter(ConsoleReporter)
        .build()?;

    println!(
        "\nBlind '{}': {} per percent, preset {}",
        blind.name(),
        blind.timing().tick_period,
        blind.timing().preset
    );

    for target in [Percent::new(70)?, blind.timing().preset, Percent::CLOSED] {
        println!("\nMoving to {}", target);
        blind.set_target_position(target);

        while blind.motion_state() != MotionState::Stopped || blind.next_deadline().is_some() {
            blind.poll();
            std::thread::sleep(Duration::from_millis(5));
        }

        println!("Settled at {}", blind.current_position());
    }

    Ok(())
}

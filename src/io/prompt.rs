// src/io/prompt.rs

//! Asks the user for the run parameters.

use crate::error::{ConfigError, PromptError};
use crate::simulation::config::{check_rate, SimulationConfig};
use std::io::{BufRead, Write};

/// Walks the user through the run length and both rates.
///
/// Negative or unreadable rates are asked for again. If the rates add up to
/// more than one request per tick the user is warned and may enter new ones.
/// A zero capacity is rejected before anything is asked.
pub fn read_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    queue_capacity: usize,
) -> Result<SimulationConfig, PromptError> {
    if queue_capacity == 0 {
        return Err(ConfigError::ZeroCapacity.into());
    }

    writeln!(output, "Program that simulates an airport with only one runway.")?;
    writeln!(output, "One plane can land or depart in each unit of time.")?;
    writeln!(
        output,
        "Up to {} planes can be waiting to land or take off at any time.",
        queue_capacity
    )?;

    let duration = loop {
        let answer = ask(input, output, "How many units of time will the simulation run? ")?;
        match answer.parse::<u32>() {
            Ok(duration) => break duration,
            Err(_) => writeln!(output, "Please enter a nonnegative whole number.")?,
        }
    };

    loop {
        let arrival = ask(input, output, "Expected number of arrivals per unit time? ")?;
        let departure = ask(input, output, "Expected number of departures per unit time? ")?;

        let (arrival_rate, departure_rate) = match (parse_rate(&arrival), parse_rate(&departure)) {
            (Some(a), Some(d)) => (a, d),
            _ => {
                writeln!(output, "These numbers must be nonnegative.")?;
                continue;
            }
        };

        let config = SimulationConfig::new(duration, arrival_rate, departure_rate)
            .with_queue_capacity(queue_capacity);

        if config.is_saturated() {
            let wish = ask(
                input,
                output,
                "The airport will become saturated. Read new numbers? ",
            )?;
            if wish.to_ascii_lowercase().starts_with('y') {
                continue;
            }
        }

        return Ok(config);
    }
}

fn parse_rate(answer: &str) -> Option<f64> {
    let value = answer.parse::<f64>().ok()?;
    check_rate("rate", value).ok().map(|_| value)
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, PromptError> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::EndOfInput);
    }
    Ok(line.trim().to_string())
}

// src/io/reporting.rs

use crate::model::plane::FlightClass;
use crate::simulation::engine::Event;
use crate::simulation::stats::Report;
use serde::Serialize;
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

/// One row of the exported event log.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub tick: u32,
    pub kind: &'static str,
    pub id: Option<u32>,
    pub class: Option<FlightClass>,
    pub wait: Option<u32>,
}

impl From<&Event> for EventRecord {
    fn from(event: &Event) -> Self {
        let tick = event.tick();
        match *event {
            Event::PlaneReady { id, class, .. } => Self {
                tick,
                kind: "ready",
                id: Some(id),
                class: Some(class),
                wait: None,
            },
            Event::PlaneRefused { id, class, .. } => Self {
                tick,
                kind: "refused",
                id: Some(id),
                class: Some(class),
                wait: None,
            },
            Event::PlaneLanded { id, wait, .. } => Self {
                tick,
                kind: "landed",
                id: Some(id),
                class: Some(FlightClass::Landing),
                wait: Some(wait),
            },
            Event::PlaneTookOff { id, wait, .. } => Self {
                tick,
                kind: "took_off",
                id: Some(id),
                class: Some(FlightClass::Takeoff),
                wait: Some(wait),
            },
            Event::RunwayIdle { .. } => Self {
                tick,
                kind: "idle",
                id: None,
                class: None,
                wait: None,
            },
        }
    }
}

/// Print one event the way a tower log would read it.
pub fn narrate<W: Write>(out: &mut W, event: &Event) -> io::Result<()> {
    match *event {
        Event::PlaneReady { id, class, .. } => match class {
            FlightClass::Landing => writeln!(out, "Plane {} ready to land.", id),
            FlightClass::Takeoff => writeln!(out, "Plane {} ready to take off.", id),
        },
        Event::PlaneRefused { id, class, .. } => match class {
            FlightClass::Landing => writeln!(out, "\tplane {} directed to another airport.", id),
            FlightClass::Takeoff => writeln!(out, "\tplane {} told to try later.", id),
        },
        Event::PlaneLanded { tick, id, wait } => {
            writeln!(out, "{}: Plane {} landed in queue {} units", tick, id, wait)
        }
        Event::PlaneTookOff { tick, id, wait } => {
            writeln!(out, "{}: Plane {} took off in queue {} units", tick, id, wait)
        }
        Event::RunwayIdle { tick } => writeln!(out, "{}: Runway is idle.", tick),
    }
}

/// Print the end-of-run statistics. Figures that are undefined for this run
/// (idle share of a zero-length run, averages with nobody serviced) are left out.
pub fn print_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    writeln!(out, "\tSimulation has concluded after {} units.", report.duration)?;
    writeln!(out, "\tTotal number of planes processed: {}", report.total_created)?;
    writeln!(out, "\tNumber of planes landed: {}", report.total_landed)?;
    writeln!(out, "\tNumber of planes taken off: {}", report.total_took_off)?;
    writeln!(out, "\tNumber of planes refused use: {}", report.total_refused)?;
    writeln!(out, "\tNumber left ready to land: {}", report.landing_queue_remaining)?;
    writeln!(out, "\tNumber left ready to take off: {}", report.takeoff_queue_remaining)?;

    if report.duration > 0 {
        writeln!(
            out,
            "\tPercentage of time runway idle: {:.2}",
            report.idle_percentage
        )?;
    }
    if let Some(wait) = report.avg_landing_wait {
        writeln!(out, "\tAverage wait time to land: {:.2}", wait)?;
    }
    if let Some(wait) = report.avg_takeoff_wait {
        writeln!(out, "\tAverage wait time to take off: {:.2}", wait)?;
    }
    Ok(())
}

/// Writes the per-tick event log to a CSV file.
pub fn write_event_log<P: AsRef<Path>>(file_path: P, events: &[Event]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(file_path.as_ref())?;

    for event in events {
        wtr.serialize(EventRecord::from(event))?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;
    Ok(())
}

/// Writes the final report as a single-row CSV file.
pub fn write_report_csv<P: AsRef<Path>>(file_path: P, report: &Report) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(file_path.as_ref())?;
    wtr.serialize(report)?;
    wtr.flush()?;
    Ok(())
}

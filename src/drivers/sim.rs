use std::thread;
use std::time::Duration;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::drivers::{LineFormat, LineSource, NumberKind, ScopeError};
/// Synthesizes device output so the plot can run without hardware.
///
/// Lines are rendered in the same text format the parser expects, so the
/// whole read-parse-append path is exercised.
pub struct SimulatedSource {
    format: LineFormat,
    rng: StdRng,
    phase: f64,
    tick: u64,
    interval: Duration,
}
impl SimulatedSource {
    pub fn new(format: LineFormat, interval: Duration) -> Self {
        Self::with_rng(format, interval, StdRng::from_entropy())
    }
    pub fn seeded(format: LineFormat, interval: Duration, seed: u64) -> Self {
        Self::with_rng(format, interval, StdRng::seed_from_u64(seed))
    }
    fn with_rng(format: LineFormat, interval: Duration, rng: StdRng) -> Self {
        Self {
            format,
            rng,
            phase: 0.0,
            tick: 0,
            interval,
        }
    }
    fn next_values(&mut self) -> Vec<f64> {
        self.phase += 0.1;
        self.tick += 1;
        match self.format.numbers {
            // x counts up, the rest oscillate around 25
            NumberKind::Integer => {
                let mut values = vec![self.tick as f64];
                for ch in 1..self.format.arity {
                    let wave = (self.phase * (ch as f64 * 0.3 + 1.0)).sin() * 20.0;
                    values.push(25.0 + wave + self.rng.gen_range(-2.0..2.0));
                }
                values
            }
            NumberKind::Float => (0..self.format.arity)
                .map(|ch| {
                    let wave = (self.phase * (ch as f64 * 0.1 + 1.0)).sin() * 10.0;
                    25.0 + wave + ch as f64 * 5.0 + self.rng.gen_range(-0.5..0.5)
                })
                .collect(),
        }
    }
}
impl LineSource for SimulatedSource {
    fn next_line(&mut self) -> Result<Option<String>, ScopeError> {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        let values = self.next_values();
        Ok(Some(self.format.render(&values)))
    }
    fn describe(&self) -> String {
        "simulation".to_owned()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn simulated_lines_parse_in_their_own_format() {
        for format in [LineFormat::semicolon_triple(), LineFormat::comma_pair()] {
            let mut source = SimulatedSource::seeded(format, Duration::ZERO, 7);
            for _ in 0..20 {
                let line = source.next_line().unwrap().unwrap();
                let sample = format.parse(&line).unwrap();
                assert_eq!(sample.arity(), format.arity);
            }
        }
    }
    #[test]
    fn integer_format_counts_x_up() {
        let format = LineFormat::comma_pair();
        let mut source = SimulatedSource::seeded(format, Duration::ZERO, 1);
        let first = format.parse(&source.next_line().unwrap().unwrap()).unwrap();
        let second = format.parse(&source.next_line().unwrap().unwrap()).unwrap();
        assert_eq!(first.values[0], 1.0);
        assert_eq!(second.values[0], 2.0);
    }
}

use std::io::BufReader;
use std::time::Duration;
use log::{info, warn};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use crate::drivers::{ReaderSource, ScopeError};
pub type SerialLineSource = ReaderSource<BufReader<Box<dyn SerialPort>>>;
/// Opens `port` as 8N1 without flow control and wraps it as a line source.
pub fn open(port: &str, baud_rate: u32, timeout: Duration) -> Result<SerialLineSource, ScopeError> {
    let handle = serialport::new(port, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(timeout)
        .open()
        .map_err(|source| {
            log_available_ports();
            ScopeError::Open {
                port: port.to_string(),
                source,
            }
        })?;
    info!("opened {port} at {baud_rate} baud, timeout {timeout:?}");
    Ok(ReaderSource::new(
        BufReader::new(handle),
        format!("{port} @ {baud_rate}"),
    ))
}
fn log_available_ports() {
    match serialport::available_ports() {
        Ok(ports) if ports.is_empty() => warn!("no serial ports found"),
        Ok(ports) => {
            let names: Vec<&str> = ports.iter().map(|p| p.port_name.as_str()).collect();
            warn!("available serial ports: {}", names.join(", "));
        }
        Err(err) => warn!("failed to enumerate serial ports: {err}"),
    }
}

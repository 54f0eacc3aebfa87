//! Prometheus text exposition of the inverter data.

use std::fmt::{Display, Formatter, Write};

use crate::api::envertec::InverterRecord;

#[derive(Copy, Clone, derive_more::Display)]
enum MetricType {
    #[display("gauge")]
    Gauge,

    #[display("counter")]
    Counter,
}

struct Metric {
    name: &'static str,
    kind: MetricType,
}

const POWER: Metric = Metric { name: "envertec_power_watt", kind: MetricType::Gauge };
const DAY_ENERGY: Metric = Metric { name: "envertec_dayenergy_kwh", kind: MetricType::Counter };
const TEMPERATURE: Metric = Metric { name: "envertec_temperature_c", kind: MetricType::Gauge };

/// Response body: the type declarations, then three samples per inverter.
#[must_use]
pub struct MetricsDocument(pub Vec<InverterRecord>);

impl Display for MetricsDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Lines are separated, not terminated, by newlines.
        let mut separator = "";
        for metric in [POWER, DAY_ENERGY, TEMPERATURE] {
            write!(f, "{separator}# TYPE {} {}", metric.name, metric.kind)?;
            separator = "\n";
        }
        for record in &self.0 {
            let labels = Labels(record);
            writeln!(f)?;
            write!(f, "{}{labels} {}", POWER.name, record.power)?;
            writeln!(f)?;
            write!(f, "{}{labels} {}", DAY_ENERGY.name, record.day_energy)?;
            writeln!(f)?;
            write!(f, "{}{labels} {}", TEMPERATURE.name, record.temperature)?;
        }
        Ok(())
    }
}

struct Labels<'a>(&'a InverterRecord);

impl Display for Labels<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{snalias=\"")?;
        write_escaped(f, &self.0.alias)?;
        f.write_str("\", gatewayalias=\"")?;
        write_escaped(f, &self.0.gateway_alias)?;
        f.write_str("\"}")
    }
}

/// Escape a label value as the exposition format requires.
fn write_escaped(f: &mut Formatter<'_>, value: &str) -> std::fmt::Result {
    for character in value.chars() {
        match character {
            '\\' => f.write_str(r"\\")?,
            '"' => f.write_str(r#"\""#)?,
            '\n' => f.write_str(r"\n")?,
            _ => f.write_char(character)?,
        }
    }
    Ok(())
}

//! Rendering of sweep results as aligned tables, CSV or JSON.

use pricer_risk::sweep::SweepOutput;

use crate::config::{OutputConfig, OutputFormat};
use crate::Result;

/// Minimum column width in table output.
const CELL_WIDTH: usize = 10;

/// Renders a sweep result in the configured format.
///
/// `title` overrides the kind label in table headings.
pub fn render(output: &SweepOutput, title: Option<&str>, config: &OutputConfig) -> Result<String> {
    match config.format {
        OutputFormat::Table => Ok(render_table(output, title, config.precision)),
        OutputFormat::Csv => render_csv(output, config.precision),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
    }
}

fn cell(value: f64, precision: usize) -> String {
    format!("{:>width$.prec$}", value, width = CELL_WIDTH, prec = precision)
}

fn render_table(output: &SweepOutput, title: Option<&str>, precision: usize) -> String {
    let label = title.unwrap_or_else(|| output.kind().label());
    let mut text = String::new();

    match output {
        SweepOutput::Vector {
            slot, mesh, values, ..
        } => {
            text.push_str(&format!("{} varying {}:\n", label, slot));
            text.push_str(&format!(
                "{:>width$}  {:>width$}\n",
                slot.symbol(),
                output.kind().name(),
                width = CELL_WIDTH
            ));
            for (x, y) in mesh.iter().zip(values) {
                text.push_str(&format!("{}  {}\n", cell(*x, precision), cell(*y, precision)));
            }
        }
        SweepOutput::Matrix {
            row_slot,
            row_mesh,
            column_slot,
            column_mesh,
            matrix,
            ..
        } => {
            text.push_str(&format!(
                "{} matrix varying {} and {}:\n",
                label, row_slot, column_slot
            ));
            let corner = format!("{}\\{}", row_slot, column_slot);
            let header: Vec<String> = column_mesh.iter().map(|&c| cell(c, precision)).collect();
            text.push_str(&format!(
                "{:>width$}  {}\n",
                corner,
                header.join("  "),
                width = CELL_WIDTH
            ));
            for (x, row) in row_mesh.iter().zip(matrix.iter_rows()) {
                let cells: Vec<String> = row.iter().map(|&v| cell(v, precision)).collect();
                text.push_str(&format!("{}  {}\n", cell(*x, precision), cells.join("  ")));
            }
        }
    }
    text
}

fn render_csv(output: &SweepOutput, precision: usize) -> Result<String> {
    let fmt = |v: f64| format!("{:.prec$}", v, prec = precision);
    let mut writer = csv::Writer::from_writer(Vec::new());

    match output {
        SweepOutput::Vector {
            kind,
            slot,
            mesh,
            values,
        } => {
            writer.write_record([slot.symbol(), kind.name()])?;
            for (x, y) in mesh.iter().zip(values) {
                writer.write_record([fmt(*x), fmt(*y)])?;
            }
        }
        SweepOutput::Matrix {
            row_slot,
            row_mesh,
            column_slot,
            column_mesh,
            matrix,
            ..
        } => {
            let mut header = vec![format!("{}\\{}", row_slot, column_slot)];
            header.extend(column_mesh.iter().map(|&c| fmt(c)));
            writer.write_record(&header)?;
            for (x, row) in row_mesh.iter().zip(matrix.iter_rows()) {
                let mut record = vec![fmt(*x)];
                record.extend(row.iter().map(|&v| fmt(v)));
                writer.write_record(&record)?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::BaseParameters;
    use pricer_risk::sweep::{AxisSpec, SweepEngine, SweepRequest};

    fn base() -> BaseParameters {
        BaseParameters::new(0.0, 30.0, 1.0, 0.05, 0.2, 0.05)
    }

    fn matrix_output() -> SweepOutput {
        SweepRequest::matrix(
            "price",
            base(),
            AxisSpec::new("S", 10.0, 12.0, 1.0),
            AxisSpec::new("K", 20.0, 22.0, 2.0),
        )
        .run(&SweepEngine::serial())
        .unwrap()
    }

    fn vector_output() -> SweepOutput {
        SweepRequest::vector("call-delta", base(), AxisSpec::new("S", 10.0, 50.0, 10.0))
            .run(&SweepEngine::serial())
            .unwrap()
    }

    fn config(format: OutputFormat) -> OutputConfig {
        OutputConfig {
            format,
            precision: 4,
        }
    }

    #[test]
    fn test_table_matrix_layout() {
        let text = render(&matrix_output(), None, &config(OutputFormat::Table)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Call Price matrix varying S and K:");
        assert!(lines[1].trim_start().starts_with("S\\K"));
        assert!(lines[1].contains("20.0000"));
        assert!(lines[1].contains("22.0000"));
        // Heading plus header plus one line per row
        assert_eq!(lines.len(), 2 + 3);
        assert!(lines[2].trim_start().starts_with("10.0000"));
    }

    #[test]
    fn test_table_title_override() {
        let text = render(&matrix_output(), Some("Price"), &config(OutputFormat::Table)).unwrap();
        assert!(text.starts_with("Price matrix varying S and K:"));
    }

    #[test]
    fn test_table_vector_layout() {
        let text = render(&vector_output(), None, &config(OutputFormat::Table)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Call Delta varying S:");
        assert_eq!(lines.len(), 2 + 5);
    }

    #[test]
    fn test_csv_matrix() {
        let text = render(&matrix_output(), None, &config(OutputFormat::Csv)).unwrap();
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "S\\K");
        assert_eq!(headers.len(), 3);
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[2][0], "12.0000");
    }

    #[test]
    fn test_csv_vector_precision() {
        let cfg = OutputConfig {
            format: OutputFormat::Csv,
            precision: 2,
        };
        let text = render(&vector_output(), None, &cfg).unwrap();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "S,call-delta");
        assert!(text.lines().nth(1).unwrap().starts_with("10.00,"));
    }

    #[test]
    fn test_json_shape_tag() {
        let text = render(&matrix_output(), None, &config(OutputFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["shape"], "matrix");
        assert_eq!(value["kind"], "price");
        assert_eq!(value["matrix"]["rows"], 3);
        assert_eq!(value["matrix"]["cols"], 2);
    }
}

use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

pub fn print_warning(message: &str) {
    let mut stderr = io::stderr().lock();
    for (i, line) in wrap(message, 66).iter().enumerate() {
        let marker = if i == 0 { "\x1b[33m!\x1b[0m" } else { " " };
        let _ = writeln!(stderr, "  {} {}", marker, line);
    }
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        for cause in err.chain() {
            if let Some(workflow_err) = cause.downcast_ref::<af_metrics::WorkflowError>() {
                collector.collect_workflow_hints(workflow_err);
            } else if let Some(io_err) = cause.downcast_ref::<af_metrics::io::Error>() {
                collector.collect_io_hints(io_err);
            }
            if collector.has_typed_hints {
                break;
            }
        }

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_workflow_hints(&mut self, err: &af_metrics::WorkflowError) {
        use af_metrics::WorkflowError;

        match err {
            WorkflowError::Io(io_err) => self.collect_io_hints(io_err),

            WorkflowError::File { source, .. } => {
                self.mark_typed();
                self.collect_std_io_hints(source);
            }

            WorkflowError::Model { source, .. } => {
                self.add("The prediction stopped at this model; others in the batch continue");
                self.collect_io_hints(source);
            }

            WorkflowError::MissingModel { .. } => {
                self.mark_typed();
                self.add("ranking_debug.json lists more models than the folder holds");
                self.add("Lower --models, or check whether AlphaFold finished relaxing");
            }

            WorkflowError::MissingFasta { searched, .. } => {
                self.mark_typed();
                self.add("Chain lengths are read from the prediction's input FASTA");
                for path in searched {
                    self.add(format!("Looked for {}", path.display()));
                }
            }

            WorkflowError::InvalidPredictionFolder(_) => {
                self.mark_typed();
                self.add("Pass the AlphaFold output folder itself, e.g. screen/P1_P2");
            }

            WorkflowError::Config(_) => {
                self.mark_typed();
                self.add("Check for misspelled keys; unknown keys are rejected");
                self.add(
                    "Valid keys: num_models, confidence_threshold, dedup, rewrite_relabeled, \
                     score_model_marker, contact_cutoff, metrics_file, filtered_file",
                );
            }
        }
    }

    fn collect_io_hints(&mut self, err: &af_metrics::io::Error) {
        use af_metrics::io::{Error as IoError, Format};

        self.mark_typed();

        match err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { format, line, .. } => {
                self.add(format!(
                    "Parser encountered an issue near line {} in {} format",
                    line, format
                ));
                match format {
                    Format::Pdb => {
                        self.add("PDB: ATOM records need at least 66 columns (through the B-factor)");
                        self.add("PDB: Coordinates, occupancy and B-factor must be numeric");
                    }
                    Format::Fasta => {
                        self.add("FASTA: Every sequence must follow a '>' header line");
                    }
                    Format::MetricsTable => {
                        self.add("Table: Chain lengths must be integers and confidences numeric or empty");
                    }
                    _ => self.add("Inspect the file around that line for malformed entries"),
                }
            }

            IoError::Json { format, .. } => {
                self.add(format!("The {} file is not valid JSON or lacks expected fields", format));
                if *format == Format::Ranking {
                    self.add("ranking_debug.json needs 'order' and 'iptm+ptm' entries");
                }
            }

            IoError::Csv(_) => {
                self.add("Rows must have as many fields as the header");
                self.add("Metrics tables are tab-separated; pair lists are comma-separated");
            }

            IoError::MissingColumn { column, .. } => {
                self.add(format!("Add a '{}' column to the header line", column));
            }

            IoError::NonNumericField { field, .. } => {
                self.add(format!("'{}' must be a number or absent", field));
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid or corrupt data");
                self.add("Verify the file is not truncated and is UTF-8 text");
            }

            ErrorKind::WriteZero | ErrorKind::StorageFull => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
        } else if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

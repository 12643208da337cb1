//! Output formatting for CLI responses.

use odoread_core::join_lines;
use odoread_protocol::{ErrorCode, ErrorInfo, Response, ResponseData};

/// Output formatter.
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output formatter.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print a response.
    pub fn print_response(&self, response: &Response) {
        if self.json {
            print_json(response);
        } else if response.success {
            if let Some(ref data) = response.data {
                self.print_data(data);
            } else {
                println!("OK");
            }
        } else if let Some(ref error) = response.error {
            eprintln!("Error [{}]: {}", error.code, error.message);
        }
    }

    /// Print response data in human-readable format.
    fn print_data(&self, data: &ResponseData) {
        match data {
            ResponseData::Readings { lines, .. } => {
                for line in lines {
                    println!("{}", line.cleaned);
                }
            }
            ResponseData::Formatted { value, .. } => {
                println!("{}", value);
            }
            ResponseData::Lines { lines } => {
                if !lines.is_empty() {
                    println!("{}", join_lines(lines));
                }
            }
            ResponseData::Geometry { orientation, rect } => {
                println!(
                    "Crop: x={} y={} {}x{} ({:?})",
                    rect.x, rect.y, rect.width, rect.height, orientation
                );
                if rect.is_empty() {
                    println!("Region is empty; check the viewport dimensions");
                }
            }
            ResponseData::Cropped { rect, path, base64 } => {
                if let Some(base64) = base64 {
                    println!("{}", base64);
                } else if let Some(path) = path {
                    println!(
                        "Cropped ({}, {}) {}x{} saved to {}",
                        rect.x, rect.y, rect.width, rect.height, path
                    );
                }
            }
            ResponseData::Reading {
                crop,
                raw_lines,
                readings,
            } => {
                match crop {
                    Some(rect) => println!(
                        "Cropped to ({}, {}) {}x{}",
                        rect.x, rect.y, rect.width, rect.height
                    ),
                    None => println!("Whole frame used"),
                }
                println!("Recognized {} line(s):", raw_lines.len());
                for line in raw_lines {
                    println!("  {}", line);
                }
                if readings.is_empty() {
                    println!("No readings");
                } else {
                    println!("Readings:");
                    for reading in readings {
                        println!("  {}", reading);
                    }
                }
            }
        }
    }

    /// Print an error message.
    pub fn print_error(&self, code: ErrorCode, message: &str) {
        if self.json {
            let response = Response {
                success: false,
                data: None,
                error: Some(ErrorInfo {
                    code,
                    message: message.to_string(),
                }),
            };
            print_json(&response);
        } else {
            eprintln!("Error [{}]: {}", code, message);
        }
    }
}

fn print_json(response: &Response) {
    match serde_json::to_string(response) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error [{}]: failed to serialize response: {}", ErrorCode::InternalError, e),
    }
}

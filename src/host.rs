//! The contract with the application the finished outline is inserted into.

use egui::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};
use crate::path::{Path, build};

/// Shape insert request sent to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptor {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub view_box: ViewBox,
    pub paths: Vec<ShapePath>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapePath {
    pub d: String,
    pub fill: ShapeFill,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeFill {
    /// The host lets users drop their own images or colors into the shape.
    pub drop_target: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
}

impl ShapeDescriptor {
    /// Describe a closed path for the host.
    ///
    /// The view box is the normalized bounding box; the display size scales it
    /// down so the larger side is at most `host_target_width`.
    pub fn from_path(path: &Path, config: &EditorConfig) -> EditorResult<Self> {
        if !path.is_closed() {
            return Err(EditorError::PathNotClosed);
        }
        let geometry = build(path);
        let bounding_box = match geometry.bounding_box {
            Some(size) if !geometry.is_empty() => size,
            _ => return Err(EditorError::EmptyPath),
        };

        let size = display_size(bounding_box, config.host_target_width);
        Ok(Self {
            top: config.insert_position.y,
            left: config.insert_position.x,
            width: size.x,
            height: size.y,
            view_box: ViewBox {
                top: 0.0,
                left: 0.0,
                width: bounding_box.x,
                height: bounding_box.y,
            },
            paths: vec![ShapePath {
                d: geometry.path_data,
                fill: ShapeFill {
                    drop_target: true,
                    color: None,
                },
            }],
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Scale `size` so its larger side is at most `target`, keeping the aspect ratio.
pub fn display_size(size: Vec2, target: f32) -> Vec2 {
    let longest = size.x.max(size.y);
    if longest <= 0.0 {
        return size;
    }
    size * (target / longest).min(1.0)
}

/// Why the host refused a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("{message}")]
    Structured {
        message: String,
        code: Option<String>,
    },
    #[error("{0}")]
    Raw(String),
}

#[derive(Deserialize)]
struct HostErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

impl HostError {
    /// Interpret an error reply: a JSON object with a `message` is structured,
    /// anything else is kept verbatim.
    pub fn from_response(text: &str) -> Self {
        match serde_json::from_str::<HostErrorBody>(text) {
            Ok(body) => HostError::Structured {
                message: body.message,
                code: body.code,
            },
            Err(_) => HostError::Raw(text.to_owned()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HostError::Structured { message, .. } => message,
            HostError::Raw(text) => text,
        }
    }
}

/// The host application's insert capability.
pub trait HostBridge {
    fn add_element(&mut self, shape: &ShapeDescriptor) -> Result<(), HostError>;
}

/// Stand-in host for the desktop build: logs each payload as JSON and keeps it.
#[derive(Debug, Default)]
pub struct LoggingHost {
    inserted: Vec<ShapeDescriptor>,
}

impl LoggingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inserted(&self) -> &[ShapeDescriptor] {
        &self.inserted
    }

    pub fn last_json(&self) -> Option<String> {
        self.inserted.last().and_then(|shape| shape.to_json().ok())
    }
}

impl HostBridge for LoggingHost {
    fn add_element(&mut self, shape: &ShapeDescriptor) -> Result<(), HostError> {
        let json = shape
            .to_json()
            .map_err(|err| HostError::Raw(err.to_string()))?;
        log::info!("add element: {json}");
        self.inserted.push(shape.clone());
        Ok(())
    }
}

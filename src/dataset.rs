use std::{fs, path::Path};

use ndarray::{Array1, ArrayView1};

use crate::{Result, TrainError};

/// One labeled sample: a feature vector and a boolean class label.
///
/// Instances are immutable after construction.
#[derive(Debug, Clone)]
pub struct Instance {
    features: Array1<f32>,
    label: bool,
}

impl Instance {
    pub fn new(features: Array1<f32>, label: bool) -> Self {
        Self { features, label }
    }

    pub fn features(&self) -> ArrayView1<'_, f32> {
        self.features.view()
    }

    pub fn label(&self) -> bool {
        self.label
    }

    /// The label coerced to {0, 1} for error computations.
    pub fn target(&self) -> f32 {
        if self.label {
            1.0
        } else {
            0.0
        }
    }
}

/// An ordered, read-only collection of instances with a uniform feature width.
///
/// Built once at startup and shared by reference across all restarts; nothing
/// mutates it after load, so unsynchronized concurrent reads are safe.
#[derive(Debug, Clone)]
pub struct Dataset {
    instances: Vec<Instance>,
    attributes: usize,
}

impl Dataset {
    /// Builds a dataset from already-parsed instances.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `instances` is empty and `DimensionMismatch`
    /// if the feature widths are not uniform.
    pub fn new(instances: Vec<Instance>) -> Result<Self> {
        let Some(first) = instances.first() else {
            return Err(TrainError::InvalidConfig("dataset has no instances".into()));
        };

        let attributes = first.features.len();
        for instance in &instances {
            if instance.features.len() != attributes {
                return Err(TrainError::DimensionMismatch {
                    what: "instance features",
                    got: instance.features.len(),
                    expected: attributes,
                });
            }
        }

        Ok(Self {
            instances,
            attributes,
        })
    }

    /// Reads a delimited text file, one instance per row.
    ///
    /// # Errors
    /// Returns `DatasetNotFound` if the file cannot be read and
    /// `DatasetMalformed` if any row cannot be turned into an instance.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TrainError::DatasetNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse_named(&text, path)
    }

    /// Parses delimited text into a dataset.
    ///
    /// Fields split on commas and/or whitespace. All fields but the last are
    /// real-valued features; the last is the label, nonzero meaning positive.
    /// Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_named(text, Path::new("<inline>"))
    }

    fn parse_named(text: &str, path: &Path) -> Result<Self> {
        let malformed = |line: usize, detail: String| TrainError::DatasetMalformed {
            path: path.to_path_buf(),
            line,
            detail,
        };

        let mut instances = Vec::new();
        let mut attributes = None;

        for (idx, row) in text.lines().enumerate() {
            let line = idx + 1;
            if row.trim().is_empty() {
                continue;
            }

            let fields: Vec<f32> = row
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|field| !field.is_empty())
                .map(|field| {
                    field
                        .parse::<f32>()
                        .map_err(|e| malformed(line, format!("bad number {field:?}: {e}")))
                })
                .collect::<Result<_>>()?;

            if fields.len() < 2 {
                return Err(malformed(
                    line,
                    format!("expected at least 1 feature and a label, got {} field(s)", fields.len()),
                ));
            }

            let width = *attributes.get_or_insert(fields.len() - 1);
            if fields.len() - 1 != width {
                return Err(malformed(
                    line,
                    format!("expected {width} feature(s), got {}", fields.len() - 1),
                ));
            }

            let (features, label) = fields.split_at(fields.len() - 1);
            instances.push(Instance::new(
                Array1::from_vec(features.to_vec()),
                label[0] != 0.0,
            ));
        }

        if instances.is_empty() {
            return Err(malformed(0, "no instances".into()));
        }

        Ok(Self {
            instances,
            // get_or_insert above guarantees this is set once any row parsed
            attributes: attributes.unwrap_or(0),
        })
    }

    /// The uniform feature-vector length.
    pub fn attributes(&self) -> usize {
        self.attributes
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }
}

//! Named dense arrays as stored on disk.
//!
//! JSON and YAML files map each name to `{ shape, data }` with `data` in
//! row-major order. SafeTensors files hold the same names as F32 or F64
//! tensors.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use safetensors::tensor::{Dtype, TensorView};
use serde::{Deserialize, Serialize};

use super::format::DataFormat;
use crate::{Error, Result};

/// One dense array with its shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTensor {
    /// Dimensions, outermost first
    pub shape: Vec<usize>,
    /// Row-major values
    pub data: Vec<f64>,
}

impl RawTensor {
    /// 2-D tensor from a matrix
    pub fn from_matrix(m: &Array2<f64>) -> Self {
        Self {
            shape: vec![m.nrows(), m.ncols()],
            data: m.iter().copied().collect(),
        }
    }

    /// 1-D tensor from a vector
    pub fn from_vector(v: &Array1<f64>) -> Self {
        Self {
            shape: vec![v.len()],
            data: v.to_vec(),
        }
    }

    fn check_len(&self, name: &str) -> Result<()> {
        let expected: usize = self.shape.iter().product();
        if expected != self.data.len() {
            return Err(Error::shape(name, &self.shape, &[self.data.len()]));
        }
        Ok(())
    }
}

/// Named arrays loaded from one file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TensorFile {
    path: PathBuf,
    tensors: BTreeMap<String, RawTensor>,
}

impl TensorFile {
    /// Empty collection that will report errors against `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tensors: BTreeMap::new(),
        }
    }

    /// Read any supported format, detected from the extension
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tensors = match DataFormat::from_path(path)? {
            DataFormat::Json => {
                let content = std::fs::read_to_string(path)?;
                serde_json::from_str(&content)
                    .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}")))?
            }
            DataFormat::Yaml => {
                let content = std::fs::read_to_string(path)?;
                serde_yaml::from_str(&content)
                    .map_err(|e| Error::Serialization(format!("YAML deserialization failed: {e}")))?
            }
            DataFormat::SafeTensors => read_safetensors(&std::fs::read(path)?)?,
        };
        let file = Self {
            path: path.to_path_buf(),
            tensors,
        };
        for (name, tensor) in &file.tensors {
            tensor.check_len(name)?;
        }
        Ok(file)
    }

    /// Write in the format implied by the extension
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = match DataFormat::from_path(path)? {
            DataFormat::Json => serde_json::to_string_pretty(&self.tensors)
                .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
                .into_bytes(),
            DataFormat::Yaml => serde_yaml::to_string(&self.tensors)
                .map_err(|e| Error::Serialization(format!("YAML serialization failed: {e}")))?
                .into_bytes(),
            DataFormat::SafeTensors => write_safetensors(&self.tensors)?,
        };
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Insert or replace a tensor
    pub fn insert(&mut self, name: impl Into<String>, tensor: RawTensor) {
        self.tensors.insert(name.into(), tensor);
    }

    /// Whether `name` is present
    pub fn contains(&self, name: &str) -> bool {
        self.tensors.contains_key(name)
    }

    /// Tensor names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tensors.keys().map(String::as_str)
    }

    fn get(&self, name: &str) -> Result<&RawTensor> {
        self.tensors.get(name).ok_or_else(|| Error::MissingTensor {
            name: name.to_string(),
            path: self.path.clone(),
        })
    }

    /// Fetch a 2-D tensor
    pub fn matrix(&self, name: &str) -> Result<Array2<f64>> {
        let t = self.get(name)?;
        match t.shape.as_slice() {
            &[rows, cols] => Array2::from_shape_vec((rows, cols), t.data.clone())
                .map_err(|_| Error::shape(name, &t.shape, &[t.data.len()])),
            other => Err(Error::shape(name, &[0, 0], other)),
        }
    }

    /// Fetch a vector; `(n,)`, `(n, 1)` and `(1, n)` shapes are accepted
    pub fn vector(&self, name: &str) -> Result<Array1<f64>> {
        let t = self.get(name)?;
        match t.shape.as_slice() {
            &[_] | &[_, 1] | &[1, _] => Ok(Array1::from(t.data.clone())),
            other => Err(Error::shape(name, &[0], other)),
        }
    }
}

fn read_safetensors(bytes: &[u8]) -> Result<BTreeMap<String, RawTensor>> {
    let st = safetensors::SafeTensors::deserialize(bytes)
        .map_err(|e| Error::Serialization(format!("SafeTensors parsing failed: {e}")))?;

    st.tensors()
        .into_iter()
        .map(|(name, view)| {
            let data: Vec<f64> = match view.dtype() {
                Dtype::F64 => bytemuck::pod_collect_to_vec::<u8, f64>(view.data()),
                Dtype::F32 => bytemuck::pod_collect_to_vec::<u8, f32>(view.data())
                    .into_iter()
                    .map(f64::from)
                    .collect(),
                other => {
                    return Err(Error::Serialization(format!(
                        "Tensor '{name}' has unsupported dtype {other:?} (expected F32 or F64)"
                    )))
                }
            };
            let tensor = RawTensor {
                shape: view.shape().to_vec(),
                data,
            };
            Ok((name, tensor))
        })
        .collect()
}

fn write_safetensors(tensors: &BTreeMap<String, RawTensor>) -> Result<Vec<u8>> {
    let bytes: Vec<(&str, &[usize], Vec<u8>)> = tensors
        .iter()
        .map(|(name, t)| {
            let raw: Vec<u8> = bytemuck::cast_slice(&t.data).to_vec();
            (name.as_str(), t.shape.as_slice(), raw)
        })
        .collect();

    let views = bytes
        .iter()
        .map(|(name, shape, raw)| {
            TensorView::new(Dtype::F64, shape.to_vec(), raw)
                .map(|view| (*name, view))
                .map_err(|e| Error::Serialization(format!("Tensor '{name}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    safetensors::serialize(views, &None)
        .map_err(|e| Error::Serialization(format!("SafeTensors serialization failed: {e}")))
}

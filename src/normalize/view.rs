use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

use crate::model::{Step, ViewResult};

use super::{NormalizeError, Result};

/// Discriminant fields of a view, decoded before the view's shape is known.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewShape {
    #[serde(rename = "numSteps")]
    pub num_steps: i64,
    pub run: f64,
    pub tester: String,
}

impl ViewShape {
    pub fn is_stepped(&self) -> bool {
        self.num_steps > 1
    }
}

/// Decodes a first or repeat view, choosing the stepped or single-step shape from the
/// declared step count. `path` names the view in error messages.
pub fn decode_view(value: &Value, path: &str) -> Result<ViewResult> {
    let shape =
        ViewShape::deserialize(value).map_err(|error| NormalizeError::decode(path, error))?;
    if shape.is_stepped() {
        trace!(path, num_steps = shape.num_steps, "stepped view");
        decode_stepped(value, shape, path)
    } else {
        trace!(path, "single-step view");
        decode_single(value, shape, path)
    }
}

#[derive(Deserialize)]
struct SteppedView {
    #[serde(default)]
    steps: Vec<Step>,
}

/// Decodes a view whose steps live in a `steps` array.
pub fn decode_stepped(value: &Value, shape: ViewShape, path: &str) -> Result<ViewResult> {
    let field = format!("{path}.steps");
    let view = SteppedView::deserialize(value)
        .map_err(|error| NormalizeError::decode(&field, error))?;
    let declared = usize::try_from(shape.num_steps)
        .map_err(|_| NormalizeError::decode(&field, "negative step count"))?;
    if view.steps.len() != declared {
        return Err(NormalizeError::decode(
            field,
            format!("declared {declared} steps but found {}", view.steps.len()),
        ));
    }
    Ok(ViewResult {
        run: shape.run,
        tester: shape.tester,
        step_count: declared,
        steps: view.steps,
    })
}

/// Decodes a view whose step fields sit directly on the view object.
pub fn decode_single(value: &Value, shape: ViewShape, path: &str) -> Result<ViewResult> {
    let step = Step::deserialize(value).map_err(|error| NormalizeError::decode(path, error))?;
    Ok(ViewResult::single(shape.run, shape.tester, step))
}

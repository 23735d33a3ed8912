/*!
 * Process
 * Immutable resource request: a size and a display name
 */

use crate::core::id::next_process_id;
use crate::core::types::{ProcessId, Size};
use crate::core::InlineString;
use serde::{Deserialize, Serialize};

/// Name given to processes created without one
pub const DEFAULT_PROCESS_NAME: &str = "Process";

/// A request for one segment of at least `size` units
///
/// Identity is the `id` handed out at construction. Two processes created
/// with the same name and size are still different processes. Deserializing
/// reads only the size and name and always draws a fresh id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ProcessRequest")]
pub struct Process {
    id: ProcessId,
    size: Size,
    name: InlineString,
}

impl Process {
    pub fn new(size: Size, name: impl Into<InlineString>) -> Self {
        Self {
            id: next_process_id(),
            size,
            name: name.into(),
        }
    }

    pub fn unnamed(size: Size) -> Self {
        Self::new(size, DEFAULT_PROCESS_NAME)
    }

    #[inline(always)]
    pub fn id(&self) -> ProcessId {
        self.id
    }

    #[inline(always)]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline(always)]
    pub fn name(&self) -> &InlineString {
        &self.name
    }
}

/// Wire shape accepted when deserializing a `Process`; any `id` is ignored
#[derive(Deserialize)]
struct ProcessRequest {
    size: Size,
    #[serde(default = "default_name")]
    name: InlineString,
}

fn default_name() -> InlineString {
    DEFAULT_PROCESS_NAME.into()
}

impl From<ProcessRequest> for Process {
    fn from(request: ProcessRequest) -> Self {
        Process::new(request.size, request.name)
    }
}

impl PartialEq for Process {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Process {}

impl std::hash::Hash for Process {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

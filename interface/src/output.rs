/// Return data staged by the guest.
///
/// The slot holds at most one payload: staging again replaces whatever was
/// there, so the payload present when execution halts is the only one the
/// host ever surfaces. This makes "only the last `ret` counts" a property
/// of the container rather than a convention.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputSlot {
  data: Option<Vec<u8>>,
}

impl OutputSlot {
  pub fn new() -> Self {
    Self::default()
  }

  /// Stages `data`, returning the payload it displaced, if any.
  pub fn stage(&mut self, data: Vec<u8>) -> Option<Vec<u8>> {
    self.data.replace(data)
  }

  /// The currently staged payload. `None` if the guest never staged one.
  pub fn peek(&self) -> Option<&[u8]> {
    self.data.as_deref()
  }

  /// Consumes the staged payload, leaving the slot empty.
  pub fn take(&mut self) -> Option<Vec<u8>> {
    self.data.take()
  }
}

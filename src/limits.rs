/// Resource limits for transcoding operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Maximum accepted input buffer length.
    pub max_input_bytes: Option<u64>,
    /// Maximum memory bytes for output buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check an input length against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check_input(&self, bytes: usize) -> Result<(), crate::CodecError> {
        if let Some(max_in) = self.max_input_bytes {
            if bytes as u64 > max_in {
                return Err(crate::CodecError::LimitExceeded(alloc::format!(
                    "input {bytes} bytes exceeds limit {max_in}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), crate::CodecError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(crate::CodecError::LimitExceeded(alloc::format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecError;

    #[test]
    fn default_is_unlimited() {
        let limits = Limits::default();
        assert!(limits.check_input(usize::MAX).is_ok());
        assert!(limits.check_memory(usize::MAX).is_ok());
    }

    #[test]
    fn limits_are_inclusive() {
        let limits = Limits {
            max_input_bytes: Some(100),
            max_memory_bytes: Some(114),
        };
        assert!(limits.check_input(100).is_ok());
        assert!(matches!(
            limits.check_input(101),
            Err(CodecError::LimitExceeded(_))
        ));
        assert!(limits.check_memory(114).is_ok());
        assert!(matches!(
            limits.check_memory(115),
            Err(CodecError::LimitExceeded(_))
        ));
    }
}

use crate::error::SizemarkError;

/// What attach must do to the target's positioning mode before the marker's
/// absolutely-positioned subtree can be appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPositionAction {
    LeaveAsIs,
    ForceRelative,
}

/// Validate a target element's computed `position` value. `static` hosts are
/// coerced to `relative`; `relative` and `absolute` already support
/// absolutely-positioned children; anything else rejects the attach.
pub fn host_position_action(position: &str) -> Result<HostPositionAction, SizemarkError> {
    match position {
        "static" => Ok(HostPositionAction::ForceRelative),
        "relative" | "absolute" => Ok(HostPositionAction::LeaveAsIs),
        other => Err(SizemarkError::UnsupportedHostPosition {
            position: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_is_coerced() {
        assert_eq!(
            host_position_action("static").unwrap(),
            HostPositionAction::ForceRelative
        );
    }

    #[test]
    fn test_relative_and_absolute_pass() {
        assert_eq!(
            host_position_action("relative").unwrap(),
            HostPositionAction::LeaveAsIs
        );
        assert_eq!(
            host_position_action("absolute").unwrap(),
            HostPositionAction::LeaveAsIs
        );
    }

    #[test]
    fn test_other_modes_rejected() {
        for position in ["fixed", "sticky", ""] {
            let err = host_position_action(position).unwrap_err();
            assert!(err.to_string().contains(position));
        }
    }
}

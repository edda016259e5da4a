/// Шаг подтверждения перед деструктивным действием (удаление).
///
/// The destructive call fires only from [`Confirmation::confirm`]; cancelling
/// drops the pending target without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation<T> {
    Idle,
    Pending(T),
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Confirmation::Idle
    }
}

impl<T> Confirmation<T> {
    pub fn request(&mut self, target: T) {
        *self = Confirmation::Pending(target);
    }

    pub fn cancel(&mut self) {
        *self = Confirmation::Idle;
    }

    /// Takes the pending target; `None` when nothing awaits confirmation.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(self, Confirmation::Idle) {
            Confirmation::Pending(target) => Some(target),
            Confirmation::Idle => None,
        }
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            Confirmation::Pending(target) => Some(target),
            Confirmation::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Confirmation::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_drops_target() {
        let mut confirmation = Confirmation::default();
        confirmation.request("ticket-1".to_string());
        assert!(confirmation.is_open());
        confirmation.cancel();
        assert_eq!(confirmation.confirm(), None);
    }

    #[test]
    fn test_confirm_yields_target_once() {
        let mut confirmation = Confirmation::default();
        confirmation.request(7);
        assert_eq!(confirmation.pending(), Some(&7));
        assert_eq!(confirmation.confirm(), Some(7));
        assert_eq!(confirmation.confirm(), None);
        assert!(!confirmation.is_open());
    }
}

// ============================================================================
// TOAST STATE - Notificaciones de un solo uso (éxito / error)
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

pub enum ToastAction {
    Push {
        kind: ToastKind,
        title: String,
        description: String,
    },
    Dismiss(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastAction {
    pub fn success(title: &str, description: &str) -> Self {
        ToastAction::Push {
            kind: ToastKind::Success,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        ToastAction::Push {
            kind: ToastKind::Error,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { kind, title, description } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    kind,
                    title,
                    description,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                next.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let state = Rc::new(ToastState::default());
        let state = state.reduce(ToastAction::success("Empresa creada", "ok"));
        let state = state.reduce(ToastAction::error("Error", "falló"));
        assert_eq!(state.toasts.len(), 2);
        assert_eq!(state.toasts[0].kind, ToastKind::Success);
        assert_ne!(state.toasts[0].id, state.toasts[1].id);

        let first = state.toasts[0].id;
        let state = state.reduce(ToastAction::Dismiss(first));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].title, "Error");

        // Descartar dos veces no hace nada
        let state = state.reduce(ToastAction::Dismiss(first));
        assert_eq!(state.toasts.len(), 1);
    }
}

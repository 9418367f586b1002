use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::form::Notifier;

const DISMISS_AFTER_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: AttrValue,
    pub body: AttrValue,
}

pub enum ToastAction {
    Push { title: AttrValue, body: AttrValue },
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push { title, body } => {
                let mut next = (*self).clone();
                next.toasts.push(Toast {
                    id: next.next_id,
                    title,
                    body,
                });
                next.next_id = next.next_id.wrapping_add(1);
                Rc::new(next)
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                let mut next = (*self).clone();
                next.toasts.retain(|t| t.id != id);
                Rc::new(next)
            }
        }
    }
}

/// Handle given to descendants through context.
#[derive(Clone, PartialEq)]
pub struct Toaster(UseReducerDispatcher<ToastQueue>);

impl Notifier for Toaster {
    fn notify(&self, title: &str, body: &str) {
        self.0.dispatch(ToastAction::Push {
            title: AttrValue::from(title.to_string()),
            body: AttrValue::from(body.to_string()),
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = Toaster(queue.dispatcher());

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u32| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div class="toast-viewport" aria-live="polite">
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 100;
                    max-width: 420px;
                }
                .toast {
                    background: #fff;
                    border-left: 4px solid var(--primary);
                    border-radius: 8px;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                    padding: 1rem 2.5rem 1rem 1rem;
                    position: relative;
                    animation: toastIn 0.3s ease-out;
                }
                .toast-title {
                    font-weight: 600;
                    margin-bottom: 0.25rem;
                    color: var(--dark);
                }
                .toast-body {
                    color: #555;
                    font-size: 0.9rem;
                }
                .toast-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    cursor: pointer;
                    color: #888;
                }
                @keyframes toastIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id));
                // Dropping the handle cancels the timer if the toast goes away first
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="toast" role="status">
            <div class="toast-title">{ props.toast.title.clone() }</div>
            <div class="toast-body">{ props.toast.body.clone() }</div>
            <button class="toast-close" aria-label="Close" onclick={close}>{"×"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, title: &'static str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push {
            title: title.into(),
            body: "body".into(),
        })
    }

    #[test]
    fn push_appends_with_increasing_ids() {
        let queue = push(push(Rc::new(ToastQueue::default()), "first"), "second");
        let ids: Vec<u32> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, [0, 1]);
        assert_eq!(&*queue.toasts()[1].title, "second");
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let queue = push(push(Rc::new(ToastQueue::default()), "first"), "second");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, 1);
    }

    #[test]
    fn dismissing_unknown_id_is_a_no_op() {
        let queue = push(Rc::new(ToastQueue::default()), "only");
        let after = queue.clone().reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &after));
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let queue = push(Rc::new(ToastQueue::default()), "a");
        let queue = queue.reduce(ToastAction::Dismiss(0));
        let queue = push(queue, "b");
        assert_eq!(queue.toasts()[0].id, 1);
    }
}

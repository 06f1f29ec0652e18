use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Element;
use yew::{Callback, NodeRef};

use super::geometry::{has_entered, intersection_ratio, Rect};
use super::section::{RevealCommand, RevealOutcome, SectionConfig, SectionMachine, SectionView};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionHandle(u64);

struct Entry {
    node: NodeRef,
    machine: SectionMachine,
    notify: Callback<SectionView>,
    timers: Vec<Timeout>,
}

#[derive(Default)]
struct ObserverInner {
    next_id: u64,
    // Ordered by registration so a batch is evaluated in observation order.
    entries: BTreeMap<SectionHandle, Entry>,
}

type Pending = Vec<(Callback<SectionView>, SectionView)>;

/// One scroll/resize-driven observer shared by every animated section on a page.
#[derive(Clone, Default)]
pub struct ViewportObserver {
    inner: Rc<RefCell<ObserverInner>>,
}

impl PartialEq for ViewportObserver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, node: NodeRef, config: SectionConfig, notify: Callback<SectionView>) -> SectionHandle {
        let handle = {
            let mut inner = self.inner.borrow_mut();
            let handle = SectionHandle(inner.next_id);
            inner.next_id += 1;
            inner.entries.insert(
                handle,
                Entry {
                    node,
                    machine: SectionMachine::new(config),
                    notify,
                    timers: Vec::new(),
                },
            );
            handle
        };
        debug!("observing section {:?}", handle);
        self.evaluate(Some(handle));
        handle
    }

    /// Stops observing; pending reveal timers are dropped, which cancels them.
    pub fn unregister(&self, handle: SectionHandle) {
        if self.inner.borrow_mut().entries.remove(&handle).is_some() {
            debug!("stopped observing section {:?}", handle);
        }
    }

    /// Re-measures every registered section against the current viewport.
    pub fn evaluate_all(&self) {
        self.evaluate(None);
    }

    fn evaluate(&self, only: Option<SectionHandle>) {
        let Some((width, height)) = viewport_size() else {
            return;
        };
        let now = now_ms();
        let weak = Rc::downgrade(&self.inner);
        let mut pending: Pending = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            for (&handle, entry) in inner.entries.iter_mut() {
                if only.is_some_and(|h| h != handle) {
                    continue;
                }
                // Nodes that are not mounted (yet or any more) produce no events.
                let Some(element) = entry.node.cast::<Element>() else {
                    continue;
                };
                let config = entry.machine.config();
                let root = Rect::viewport(width, height, config.root_margin);
                let threshold = config.threshold;
                let ratio = intersection_ratio(&measure(&element), &root);

                let before = entry.machine.view();
                let commands = entry.machine.on_intersection_change(has_entered(ratio, threshold), now);
                if !commands.is_empty() {
                    debug!(
                        "section {:?} in view: {}, generation {}",
                        handle,
                        entry.machine.state().is_in_view,
                        entry.machine.generation()
                    );
                }
                apply_commands(&weak, handle, entry, commands);
                let after = entry.machine.view();
                if before != after {
                    pending.push((entry.notify.clone(), after));
                }
            }
        }
        emit(pending);
    }

    fn fire(&self, handle: SectionHandle, stage: usize, generation: u64) {
        let weak = Rc::downgrade(&self.inner);
        let mut pending: Pending = Vec::new();
        {
            let mut inner = self.inner.borrow_mut();
            let Some(entry) = inner.entries.get_mut(&handle) else {
                return;
            };
            match entry.machine.fire_reveal(stage, generation, now_ms()) {
                RevealOutcome::Revealed => {
                    pending.push((entry.notify.clone(), entry.machine.view()));
                }
                RevealOutcome::Early { remaining_ms } => {
                    entry.timers.push(arm_timer(weak, handle, stage, generation, remaining_ms));
                }
                RevealOutcome::Stale => {}
            }
        }
        emit(pending);
    }
}

fn apply_commands(weak: &Weak<RefCell<ObserverInner>>, handle: SectionHandle, entry: &mut Entry, commands: Vec<RevealCommand>) {
    for command in commands {
        match command {
            RevealCommand::Arm { stage, delay_ms, generation } => {
                entry.timers.push(arm_timer(weak.clone(), handle, stage, generation, delay_ms));
            }
            RevealCommand::CancelAll => entry.timers.clear(),
        }
    }
}

fn arm_timer(weak: Weak<RefCell<ObserverInner>>, handle: SectionHandle, stage: usize, generation: u64, delay_ms: u32) -> Timeout {
    Timeout::new(delay_ms, move || {
        if let Some(inner) = weak.upgrade() {
            ViewportObserver { inner }.fire(handle, stage, generation);
        }
    })
}

// Emitting can re-render synchronously, and rendering can register or
// unregister sections, so callbacks run only after the borrow is released.
fn emit(pending: Pending) {
    for (notify, view) in pending {
        notify.emit(view);
    }
}

fn measure(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.top(), rect.left(), rect.width(), rect.height())
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

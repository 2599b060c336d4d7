//! Section lifecycle tests
//!
//! Drives a tracker from a fake window that dispatches scroll/resize/layout
//! samples to registered listeners, the same way the webview bridge does.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use dolphin_guide_core::{
    LayoutEvent, LayoutSample, SectionTracker, Subscription, SubscriptionSet, TrackerPhase,
    ViewportRange, SECTIONS,
};

type Listener = Box<dyn FnMut(LayoutSample)>;

/// Minimal event target: listeners keyed by id, removable.
#[derive(Default)]
struct FakeWindow {
    next_id: u32,
    listeners: BTreeMap<u32, (LayoutEvent, Listener)>,
}

impl FakeWindow {
    fn add(window: &Rc<RefCell<Self>>, event: LayoutEvent, listener: Listener) -> Subscription {
        let id = {
            let mut w = window.borrow_mut();
            w.next_id += 1;
            let id = w.next_id;
            w.listeners.insert(id, (event, listener));
            id
        };
        let name = match event {
            LayoutEvent::Attach => "attach",
            LayoutEvent::Scroll => "scroll",
            LayoutEvent::Resize => "resize",
            LayoutEvent::Layout => "layout",
        };
        let window = Rc::downgrade(window);
        Subscription::new(name, move || {
            if let Some(window) = window.upgrade() {
                window.borrow_mut().listeners.remove(&id);
            }
        })
    }

    fn dispatch(window: &Rc<RefCell<Self>>, sample: LayoutSample) {
        let mut w = window.borrow_mut();
        for (event, listener) in w.listeners.values_mut() {
            if *event == sample.event {
                listener(sample);
            }
        }
    }

    fn listener_count(window: &Rc<RefCell<Self>>) -> usize {
        window.borrow().listeners.len()
    }
}

/// A mounted section: tracker plus the listeners feeding it.
struct MountedSection {
    tracker: Rc<RefCell<SectionTracker>>,
    subscriptions: SubscriptionSet,
}

fn mount(window: &Rc<RefCell<FakeWindow>>, id: &str) -> MountedSection {
    let tracker = Rc::new(RefCell::new(SectionTracker::new(id)));
    let mut subscriptions = SubscriptionSet::new(id);
    for event in [LayoutEvent::Layout, LayoutEvent::Resize, LayoutEvent::Scroll] {
        let tracker = tracker.clone();
        subscriptions.push(FakeWindow::add(
            window,
            event,
            Box::new(move |sample| {
                let _ = tracker.borrow_mut().observe(sample);
            }),
        ));
    }
    MountedSection {
        tracker,
        subscriptions,
    }
}

fn unmount(section: MountedSection) -> Rc<RefCell<SectionTracker>> {
    section.tracker.borrow_mut().detach();
    drop(section.subscriptions);
    section.tracker
}

#[test]
fn mounted_section_follows_scroll() {
    let window = Rc::new(RefCell::new(FakeWindow::default()));
    let section = mount(&window, "windows");
    assert_eq!(FakeWindow::listener_count(&window), 3);

    FakeWindow::dispatch(
        &window,
        LayoutSample::attach(Some(1500.0), 0.0, Some(900.0)).with_event(LayoutEvent::Layout),
    );
    assert!(matches!(
        section.tracker.borrow().phase(),
        TrackerPhase::RangesKnown { .. }
    ));

    FakeWindow::dispatch(
        &window,
        LayoutSample::attach(Some(500.0), 1000.0, Some(900.0)).with_event(LayoutEvent::Scroll),
    );
    let tracker = section.tracker.borrow();
    assert_eq!(tracker.scroll_y(), 1000.0);
    assert_eq!(tracker.updates(), 2);
}

#[test]
fn unmount_leaves_no_listeners_and_no_updates() {
    let window = Rc::new(RefCell::new(FakeWindow::default()));
    let section = mount(&window, "mac");
    FakeWindow::dispatch(
        &window,
        LayoutSample::attach(Some(800.0), 0.0, Some(900.0)).with_event(LayoutEvent::Resize),
    );

    let tracker = unmount(section);
    assert_eq!(FakeWindow::listener_count(&window), 0);
    let updates = tracker.borrow().updates();

    for event in [LayoutEvent::Scroll, LayoutEvent::Resize, LayoutEvent::Layout] {
        FakeWindow::dispatch(
            &window,
            LayoutSample::attach(Some(100.0), 700.0, Some(500.0)).with_event(event),
        );
    }
    assert_eq!(tracker.borrow().updates(), updates);
    assert_eq!(tracker.borrow().phase(), TrackerPhase::Detached);
}

#[test]
fn sections_are_independent() {
    let window = Rc::new(RefCell::new(FakeWindow::default()));
    let mounted: Vec<_> = SECTIONS.iter().map(|s| mount(&window, s.id)).collect();
    assert_eq!(FakeWindow::listener_count(&window), SECTIONS.len() * 3);

    let mut mounted = mounted.into_iter();
    let first = mounted.next().unwrap();
    let _first_tracker = unmount(first);
    assert_eq!(FakeWindow::listener_count(&window), (SECTIONS.len() - 1) * 3);

    FakeWindow::dispatch(
        &window,
        LayoutSample::attach(Some(2400.0), 0.0, Some(1000.0)).with_event(LayoutEvent::Layout),
    );
    for section in mounted {
        let tracker = section.tracker.borrow();
        assert_eq!(tracker.updates(), 1);
        assert_eq!(
            tracker.ranges(),
            ViewportRange::derive(2400.0, 1000.0, &Default::default())
        );
    }
}

#[test]
fn ranges_wait_for_layout() {
    let window = Rc::new(RefCell::new(FakeWindow::default()));
    let section = mount(&window, "controller");

    FakeWindow::dispatch(
        &window,
        LayoutSample::attach(None, 0.0, Some(900.0)).with_event(LayoutEvent::Resize),
    );
    assert_eq!(section.tracker.borrow().phase(), TrackerPhase::Uninitialized);
    assert_eq!(section.tracker.borrow().ranges(), ViewportRange::default());

    FakeWindow::dispatch(
        &window,
        LayoutSample::attach(Some(2000.0), 0.0, Some(900.0)).with_event(LayoutEvent::Layout),
    );
    assert_ne!(section.tracker.borrow().ranges(), ViewportRange::default());
}

use super::*;
use futures::channel::oneshot;
use futures::executor::block_on;

fn slot() -> Rc<RefCell<AsyncState<u32, String>>> {
    Rc::new(RefCell::new(AsyncState::default()))
}

fn from_channel(rx: oneshot::Receiver<Result<u32, String>>) -> impl Future<Output = Result<u32, String>> {
    async move { rx.await.unwrap_or_else(|_| Err("sender dropped".to_owned())) }
}

#[test]
fn generation_tickets_supersede_earlier_ones() {
    let generation = RunGeneration::default();
    let first = generation.begin();
    assert!(generation.is_current(first));
    let second = generation.begin();
    assert!(!generation.is_current(first));
    assert!(generation.is_current(second));
    assert_ne!(first, second);
}

#[test]
fn start_marks_loading_before_the_future_is_polled() {
    let state = slot();
    let tracker = RunTracker::new(state.clone());
    let (_tx, rx) = oneshot::channel();
    let _pending = tracker.start(from_channel(rx));
    assert!(state.borrow().loading);
}

#[test]
fn single_run_applies_its_result() {
    let state = slot();
    let tracker = RunTracker::new(state.clone());
    assert!(block_on(tracker.start(async { Ok::<_, String>(5) })));
    assert_eq!(*state.borrow(), AsyncState { data: Some(5), loading: false, error: None });
}

#[test]
fn superseded_run_settling_late_does_not_overwrite_newer_result() {
    let state = slot();
    let tracker = RunTracker::new(state.clone());
    let (tx_old, rx_old) = oneshot::channel();
    let (tx_new, rx_new) = oneshot::channel();

    let old_run = tracker.start(from_channel(rx_old));
    let new_run = tracker.start(from_channel(rx_new));

    tx_new.send(Ok(2)).unwrap();
    assert!(block_on(new_run));
    assert_eq!(*state.borrow(), AsyncState { data: Some(2), loading: false, error: None });

    tx_old.send(Err("late failure".to_owned())).unwrap();
    assert!(!block_on(old_run));
    assert_eq!(*state.borrow(), AsyncState { data: Some(2), loading: false, error: None });
}

#[test]
fn superseded_run_settling_early_leaves_state_loading() {
    let state = slot();
    let tracker = RunTracker::new(state.clone());
    let (tx_old, rx_old) = oneshot::channel();
    let (tx_new, rx_new) = oneshot::channel();

    let old_run = tracker.start(from_channel(rx_old));
    let new_run = tracker.start(from_channel(rx_new));

    tx_old.send(Ok(1)).unwrap();
    assert!(!block_on(old_run));
    assert!(state.borrow().loading);
    assert_eq!(state.borrow().data, None);

    tx_new.send(Ok(9)).unwrap();
    assert!(block_on(new_run));
    assert_eq!(*state.borrow(), AsyncState { data: Some(9), loading: false, error: None });
}

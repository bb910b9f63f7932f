//! Lifecycle transitions and error paths of the block processor.

use std::sync::Arc;

use ringcrush_engine::{EngineError, LifecycleState, Processor, SharedParams, StreamSetup};

fn setup() -> StreamSetup {
    StreamSetup::new(44100.0, 256, 2)
}

fn block() -> (Vec<f32>, Vec<f32>) {
    (vec![0.3; 256], vec![-0.3; 256])
}

#[test]
fn process_before_configure_fails_and_leaves_buffer() {
    let mut p = Processor::new(Arc::new(SharedParams::new()));
    let (mut l, mut r) = block();
    let err = p
        .process_block(&mut [l.as_mut_slice(), r.as_mut_slice()])
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::NotConfigured {
            state: LifecycleState::Unconfigured
        }
    );
    assert!(l.iter().all(|&x| x == 0.3));
    assert!(r.iter().all(|&x| x == -0.3));
}

#[test]
fn full_lifecycle() {
    let mut p = Processor::new(Arc::new(SharedParams::new()));
    p.configure(setup()).unwrap();
    assert_eq!(p.state(), LifecycleState::Configured);

    let (mut l, mut r) = block();
    p.process_block(&mut [l.as_mut_slice(), r.as_mut_slice()])
        .unwrap();
    assert_eq!(p.state(), LifecycleState::Processing);

    p.stop();
    assert_eq!(p.state(), LifecycleState::Configured);

    // processing again after stop is legal
    p.process_block(&mut [l.as_mut_slice(), r.as_mut_slice()])
        .unwrap();
    assert_eq!(p.state(), LifecycleState::Processing);

    p.release();
    assert_eq!(p.state(), LifecycleState::Released);
    let err = p
        .process_block(&mut [l.as_mut_slice(), r.as_mut_slice()])
        .unwrap_err();
    assert!(matches!(
        err,
        EngineError::NotConfigured {
            state: LifecycleState::Released
        }
    ));

    // configure re-prepares a released processor
    p.configure(setup()).unwrap();
    assert_eq!(p.state(), LifecycleState::Configured);
    p.process_block(&mut [l.as_mut_slice(), r.as_mut_slice()])
        .unwrap();
}

#[test]
fn stop_outside_processing_is_noop() {
    let mut p = Processor::new(Arc::new(SharedParams::new()));
    p.stop();
    assert_eq!(p.state(), LifecycleState::Unconfigured);
    p.configure(setup()).unwrap();
    p.stop();
    assert_eq!(p.state(), LifecycleState::Configured);
}

#[test]
fn failed_configure_keeps_previous_setup() {
    let mut p = Processor::new(Arc::new(SharedParams::new()));
    p.configure(setup()).unwrap();
    assert!(p.configure(StreamSetup::new(44100.0, 256, 0)).is_err());
    assert_eq!(p.setup(), Some(setup()));
    assert_eq!(p.state(), LifecycleState::Configured);
}

#[test]
fn empty_channel_list_is_ok() {
    let mut p = Processor::new(Arc::new(SharedParams::new()));
    p.configure(setup()).unwrap();
    let mut none: [&mut [f32]; 0] = [];
    p.process_block(&mut none).unwrap();
}

#[test]
fn error_messages_are_descriptive() {
    let err = EngineError::NotConfigured {
        state: LifecycleState::Released,
    };
    assert!(err.to_string().contains("Released"));

    let mut p = Processor::new(Arc::new(SharedParams::new()));
    let err = p
        .configure(StreamSetup::new(-1.0, 256, 2))
        .unwrap_err();
    assert!(err.to_string().contains("sample rate"));
}

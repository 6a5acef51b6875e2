use archviz_core::config::LatencyBounds;
use archviz_core::core::Phase;
use archviz_core::core::units::TimingModel;
use mockall::mock;

mock! {
    pub Timing {}
    impl TimingModel for Timing {
        fn latency_ms(&mut self, phase: Phase, bounds: LatencyBounds) -> u32;
    }
}

/// A mock that answers every phase with `latency` and accepts any number of calls.
pub fn constant_timing(latency: u32) -> MockTiming {
    let mut mock = MockTiming::new();
    let _ = mock.expect_latency_ms().returning(move |_, _| latency);
    mock
}

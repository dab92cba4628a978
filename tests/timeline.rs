mod tests {
    use embassy_time::{Duration, Instant};
    use ring_animator::animation::{Animation, Flash};
    use ring_animator::color::{ColorF, Rgb};
    use ring_animator::frame_scheduler::{DEFAULT_FRAME_DURATION, FrameScheduler};
    use ring_animator::renderer::{Renderer, RendererGroup};
    use ring_animator::timeline::{Timeline, ZeroPeriodError};
    use ring_animator::view::Strip;
    use ring_animator::{DriverError, OutputDriver};

    struct NullDriver;

    impl OutputDriver for NullDriver {
        fn write(&mut self, _colors: &[Rgb]) -> Result<(), DriverError> {
            Ok(())
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_sample_normalizes_elapsed_time() {
        let timeline =
            Timeline::new(Instant::from_millis(0), Duration::from_millis(1000)).unwrap();
        assert!(close(timeline.sample(Instant::from_millis(0)), 0.0));
        assert!(close(timeline.sample(Instant::from_millis(250)), 0.25));
        assert!(close(timeline.sample(Instant::from_millis(500)), 0.5));
    }

    #[test]
    fn test_sample_wraps_after_full_period() {
        let timeline =
            Timeline::new(Instant::from_millis(0), Duration::from_millis(1000)).unwrap();
        assert!(close(timeline.sample(Instant::from_millis(1000)), 0.0));
        assert!(close(timeline.sample(Instant::from_millis(2750)), 0.75));
        // The sample never reaches 1.0.
        assert!(timeline.sample(Instant::from_millis(999)) < 1.0);
    }

    #[test]
    fn test_sample_saturates_before_epoch() {
        let timeline =
            Timeline::new(Instant::from_millis(500), Duration::from_millis(1000)).unwrap();
        assert!(close(timeline.sample(Instant::from_millis(100)), 0.0));
    }

    #[test]
    fn test_zero_period_is_rejected() {
        assert_eq!(
            Timeline::new(Instant::from_millis(0), Duration::from_millis(0)).err(),
            Some(ZeroPeriodError)
        );
    }

    #[test]
    fn test_scheduler_paces_frames() {
        let strip: Strip<NullDriver, 4> = Strip::new(NullDriver);
        let flash = Flash::new(ColorF::RED);
        let mut group: RendererGroup<1> = RendererGroup::new();
        group.push(Renderer::new(&flash, &strip)).ok().unwrap();

        let timeline =
            Timeline::new(Instant::from_millis(0), Duration::from_millis(1000)).unwrap();
        let mut scheduler = FrameScheduler::new(timeline, group);

        let first = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert_eq!(first.next_deadline, Instant::from_millis(0) + DEFAULT_FRAME_DURATION);
        assert_eq!(first.sleep_duration, DEFAULT_FRAME_DURATION);

        // Ticking on the deadline keeps the cadence.
        let second = scheduler.tick(first.next_deadline).unwrap();
        assert_eq!(
            second.next_deadline,
            first.next_deadline + DEFAULT_FRAME_DURATION
        );
    }

    #[test]
    fn test_scheduler_resets_after_a_stall() {
        let strip: Strip<NullDriver, 4> = Strip::new(NullDriver);
        let flash = Flash::new(ColorF::RED);
        let mut group: RendererGroup<1> = RendererGroup::new();
        group.push(Renderer::new(&flash, &strip)).ok().unwrap();

        let timeline =
            Timeline::new(Instant::from_millis(0), Duration::from_millis(1000)).unwrap();
        let mut scheduler = FrameScheduler::with_frame_duration(
            timeline,
            group,
            Duration::from_millis(10),
        );

        scheduler.tick(Instant::from_millis(0)).unwrap();
        // A long stall skips the backlog instead of bursting.
        let result = scheduler.tick(Instant::from_millis(500)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(510));
    }

    #[test]
    fn test_sampled_time_drives_rendering() {
        // A flash rendered through timeline samples goes dark at the
        // same phase as direct evaluation.
        let flash = Flash::new(ColorF::RED);
        let timeline =
            Timeline::new(Instant::from_millis(0), Duration::from_millis(1000)).unwrap();
        let t = timeline.sample(Instant::from_millis(1125));
        assert!(flash.evaluate(t, 0.0).is_black());
    }
}

use reptile::{
    DrawCommand, NoOpTickObserver, PointerState, RecordingSurface, Reptile, ReptileConfig,
    ReptileError, Segment, TickObserver, Vec2,
};

#[test]
fn chain_correct_segment_count() {
    let config = ReptileConfig::new().with_segment_count(12);
    let reptile: Reptile<f32> = Reptile::new(Vec2::new(50.0, 60.0), &config).unwrap();
    assert_eq!(reptile.len(), 12);
    assert!(!reptile.is_empty());
    for s in reptile.segments() {
        assert_eq!(s.position(), Vec2::new(50.0, 60.0));
        assert_eq!(s.length(), 15.0);
    }
}

#[test]
fn chain_rejects_invalid_config() {
    let config = ReptileConfig::<f64>::new().with_damping(-0.5);
    assert_eq!(
        Reptile::new(Vec2::zero(), &config).err(),
        Some(ReptileError::InvalidDamping)
    );
}

#[test]
fn three_segment_scenario_matches_closed_form() {
    let config = ReptileConfig::new().with_segment_count(3).with_segment_length(15.0);
    let mut reptile: Reptile<f64> = Reptile::new(Vec2::new(100.0, 100.0), &config).unwrap();
    let pointer = PointerState::new(Vec2::new(200.0, 100.0));

    reptile.update(&pointer, &mut NoOpTickObserver);

    // Each segment starts at rest at x = 100 and chases the x its
    // predecessor just reached; y never moves.
    let mut target = 200.0f64;
    for s in reptile.segments() {
        let vx = (0.0 + (target - 100.0) * 0.05) * 0.98;
        let x = 100.0 + vx;
        assert_eq!(s.velocity(), Vec2::new(vx, 0.0));
        assert_eq!(s.position(), Vec2::new(x, 100.0));
        target = x;
    }

    let head = reptile.head();
    assert!((head.velocity().x - 4.9).abs() < 1e-12);
    assert!((head.position().x - 104.9).abs() < 1e-12);
    // 104.9 - 100 = 4.9 -> 4.9 * 0.05 * 0.98
    assert!((reptile.segment(1).unwrap().velocity().x - 0.2401).abs() < 1e-12);
}

#[derive(Default)]
struct FollowLog {
    calls: Vec<(usize, Vec2<f64>, Vec2<f64>)>,
    updates: usize,
}

impl TickObserver<f64> for FollowLog {
    fn on_follow(&mut self, index: usize, target: Vec2<f64>, segment: &Segment<f64>) {
        self.calls.push((index, target, segment.position()));
    }

    fn on_update_complete(&mut self) {
        self.updates += 1;
    }
}

#[test]
fn each_segment_chases_predecessor_new_position() {
    let config = ReptileConfig::new().with_segment_count(6);
    let mut reptile: Reptile<f64> = Reptile::new(Vec2::new(0.0, 0.0), &config).unwrap();
    let mut pointer = PointerState::new(Vec2::new(30.0, -20.0));
    let mut log = FollowLog::default();

    reptile.update(&pointer, &mut log);
    pointer.move_to(Vec2::new(-5.0, 40.0));
    reptile.update(&pointer, &mut log);

    assert_eq!(log.updates, 2);
    assert_eq!(log.calls.len(), 12);
    for tick in log.calls.chunks(6) {
        let indices: Vec<_> = tick.iter().map(|c| c.0).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4, 5]);
        for pair in tick.windows(2) {
            assert_eq!(pair[1].1, pair[0].2);
        }
    }
    assert_eq!(log.calls[0].1, Vec2::new(30.0, -20.0));
    assert_eq!(log.calls[6].1, Vec2::new(-5.0, 40.0));
}

#[test]
fn render_draws_head_to_tail_with_stroke() {
    let config = ReptileConfig::new().with_segment_count(4);
    let mut reptile: Reptile<f32> = Reptile::new(Vec2::new(20.0, 20.0), &config).unwrap();
    reptile.update(&PointerState::new(Vec2::new(80.0, 50.0)), &mut NoOpTickObserver);

    let mut surface = RecordingSurface::new(100.0, 100.0);
    reptile.render(&mut surface, &mut NoOpTickObserver);

    assert_eq!(surface.commands().len(), 4);
    for (cmd, seg) in surface.commands().iter().zip(reptile.segments()) {
        match cmd {
            DrawCommand::Line { from, to, stroke } => {
                assert_eq!(*from, seg.position());
                assert_eq!(*to, seg.endpoint());
                assert_eq!(stroke, reptile.stroke());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}

#[test]
fn render_is_idempotent() {
    let config = ReptileConfig::new().with_segment_count(20);
    let mut reptile: Reptile<f32> = Reptile::new(Vec2::new(0.0, 0.0), &config).unwrap();
    for i in 0..15 {
        let p = PointerState::new(Vec2::new(i as f32 * 7.0, 100.0 - i as f32));
        reptile.update(&p, &mut NoOpTickObserver);
    }

    let mut first = RecordingSurface::new(200.0, 200.0);
    let mut second = RecordingSurface::new(200.0, 200.0);
    reptile.render(&mut first, &mut NoOpTickObserver);
    reptile.render(&mut second, &mut NoOpTickObserver);
    reptile.render(&mut second, &mut NoOpTickObserver);

    let n = first.commands().len();
    assert_eq!(first.commands(), &second.commands()[..n]);
    assert_eq!(first.commands(), &second.commands()[n..]);
}

#[test]
fn segment_gap_is_not_constrained_to_length() {
    let config = ReptileConfig::new().with_segment_count(2);
    let mut reptile: Reptile<f32> = Reptile::new(Vec2::new(0.0, 0.0), &config).unwrap();
    reptile.update(&PointerState::new(Vec2::new(1000.0, 0.0)), &mut NoOpTickObserver);

    let head = reptile.segment(0).unwrap().position();
    let gap = head.distance(reptile.segment(1).unwrap().position());
    assert!((gap - 15.0).abs() > 1.0, "gap {} should float free of the bone length", gap);
}

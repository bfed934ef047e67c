mod tests {
    use blink_kit::{Effect, RegistryFull, Scheduler, SchedulerState};

    type Log = Vec<&'static str>;

    struct Named(&'static str);

    impl Effect<Log> for Named {
        fn run(&self, log: &mut Log) {
            log.push(self.0);
        }

        fn name(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn test_cycles_in_registration_order() {
        let (a, b, c) = (Named("a"), Named("b"), Named("c"));
        let mut scheduler: Scheduler<'_, Log, 4> = Scheduler::new();
        scheduler.register_all([&a as &dyn Effect<Log>, &b, &c]);

        let mut log = Log::new();
        for _ in 0..7 {
            assert!(scheduler.run_next(&mut log));
        }
        assert_eq!(log, ["a", "b", "c", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_state_and_cursor() {
        let (a, b) = (Named("a"), Named("b"));
        let mut scheduler: Scheduler<'_, Log, 4> = Scheduler::new();
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert_eq!(scheduler.cursor(), None);

        scheduler.register(&a).unwrap();
        scheduler.register(&b).unwrap();
        let mut log = Log::new();

        scheduler.run_next(&mut log);
        assert_eq!(scheduler.state(), SchedulerState::Running { cursor: 0 });
        scheduler.run_next(&mut log);
        assert_eq!(scheduler.state(), SchedulerState::Running { cursor: 1 });
        scheduler.run_next(&mut log);
        assert_eq!(scheduler.cursor(), Some(0));
    }

    #[test]
    fn test_capacity_is_a_soft_cap() {
        let (a, b, c) = (Named("a"), Named("b"), Named("c"));
        let mut scheduler: Scheduler<'_, Log, 2> = Scheduler::new();
        assert!(scheduler.register(&a).is_ok());
        assert!(scheduler.register(&b).is_ok());

        let Err(RegistryFull(rejected)) = scheduler.register(&c) else {
            panic!("third effect should not fit");
        };
        assert_eq!(rejected.name(), "c");
        assert_eq!(scheduler.len(), 2);
        assert_eq!(scheduler.capacity(), 2);

        // register_all drops the overflow without complaint
        scheduler.register_all([&c as &dyn Effect<Log>, &c]);
        assert_eq!(scheduler.len(), 2);

        let mut log = Log::new();
        for _ in 0..4 {
            scheduler.run_next(&mut log);
        }
        assert_eq!(log, ["a", "b", "a", "b"]);
    }

    #[test]
    fn test_empty_registry() {
        let mut scheduler: Scheduler<'_, Log, 4> = Scheduler::default();
        let mut log = Log::new();
        assert!(scheduler.is_empty());
        assert!(!scheduler.run_next(&mut log));
        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert!(log.is_empty());
    }

    #[test]
    fn test_closures_are_effects() {
        let push_one = |log: &mut Log| log.push("one");
        let push_two = |log: &mut Log| {
            log.push("two");
            log.push("two");
        };
        let mut scheduler: Scheduler<'_, Log, 4> = Scheduler::new();
        scheduler.register(&push_one).unwrap();
        scheduler.register(&push_two).unwrap();

        let mut log = Log::new();
        scheduler.run_next(&mut log);
        scheduler.run_next(&mut log);
        scheduler.run_next(&mut log);
        assert_eq!(log, ["one", "two", "two", "one"]);
        assert_eq!(Effect::<Log>::name(&push_one), "anonymous");
    }
}

mod tests {
    use core::convert::Infallible;

    use blink_kit::{Button, ExitSignal, PressedTo};
    use embedded_hal::digital::{ErrorType, InputPin};

    struct MockPin {
        low: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.low)
        }
    }

    #[test]
    fn test_single_listener() {
        let signal = ExitSignal::new();
        assert!(signal.listener().is_some());
        assert!(signal.listener().is_none());
    }

    #[test]
    fn test_take_consumes_once() {
        let signal = ExitSignal::new();
        let mut listener = signal.listener().unwrap();
        assert!(!listener.take());

        signal.raise();
        assert!(signal.is_pending());
        assert!(listener.take());
        assert!(!signal.is_pending());
        assert!(!listener.take());
        assert!(!listener.take());

        signal.raise();
        assert!(listener.take());
    }

    #[test]
    fn test_raises_collapse() {
        let signal = ExitSignal::new();
        let mut listener = signal.listener().unwrap();
        signal.raise();
        signal.raise();
        signal.raise();
        assert!(listener.take());
        assert!(!listener.take());
    }

    #[test]
    fn test_raise_from_other_thread() {
        static SIGNAL: ExitSignal = ExitSignal::new();
        let mut listener = SIGNAL.listener().unwrap();

        std::thread::spawn(|| SIGNAL.raise()).join().unwrap();
        assert!(listener.take());
        assert!(!listener.take());
    }

    #[test]
    fn test_button_to_ground() {
        let signal = ExitSignal::new();
        let mut listener = signal.listener().unwrap();

        let mut button = Button::new(MockPin { low: false }, PressedTo::Ground, &signal);
        assert_eq!(button.on_pin_change(), Ok(false));
        assert!(!listener.take());

        let mut button = Button::new(MockPin { low: true }, PressedTo::Ground, &signal);
        assert_eq!(button.on_pin_change(), Ok(true));
        assert!(listener.take());
    }

    #[test]
    fn test_button_to_voltage() {
        let signal = ExitSignal::new();
        let mut listener = signal.listener().unwrap();

        let mut button = Button::new(MockPin { low: true }, PressedTo::Voltage, &signal);
        assert_eq!(button.on_pin_change(), Ok(false));
        assert!(!signal.is_pending());

        let mut pin = button.free();
        pin.low = false;
        let mut button = Button::new(pin, PressedTo::Voltage, &signal);
        assert_eq!(button.is_pressed(), Ok(true));
        assert_eq!(button.on_pin_change(), Ok(true));
        assert!(listener.take());
    }
}

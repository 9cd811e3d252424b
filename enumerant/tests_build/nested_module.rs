mod outer {
    pub mod inner {
        #[derive(Clone, Copy, Debug, PartialEq, enumerant::Enumerant)]
        pub enum Signal {
            Stop,
            Go,
        }
    }
}

use enumerant::Enumerant;
use outer::inner::Signal;

fn main() {
    assert_eq!(Signal::count(), 2);
    assert_eq!(Signal::enum_to_string(Signal::Go), Some("Signal::Go"));
}

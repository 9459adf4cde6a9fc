/*!
 * Object Slots - Demo
 *
 * Binds a free function, a method and a closure to one signal,
 * emits, unbinds the first two and emits again.
 */

use std::error::Error;
use std::sync::Arc;
use tracing::info;

use object_slots::{init_tracing, Emitter, ObjectSlots, SlotConfig};

struct Greeter {
    slots: ObjectSlots,
}

impl Greeter {
    fn new(config: SlotConfig) -> Self {
        Self {
            slots: ObjectSlots::with_config(config),
        }
    }

    fn hello(&self, message: String) {
        self.slots.emit(Self::hello, (message,));
    }

    fn other_signal(&self) {
        self.slots.emit(Self::other_signal, ());
    }
}

impl Emitter for Greeter {
    fn slots(&self) -> &ObjectSlots {
        &self.slots
    }
}

struct Listener;

impl Listener {
    fn on_hello(&self, message: &String) {
        info!(%message, "Method slot");
    }
}

fn on_hello(message: &String) {
    info!(%message, "Function slot");
}

fn on_other_signal() {
    info!("Other signal slot");
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = SlotConfig::from_env()?;
    info!(?config, "Object slots demo starting");

    let greeter = Greeter::new(config);
    let listener = Arc::new(Listener);

    greeter.bind_function(Greeter::hello, on_hello);
    greeter.bind_method(Greeter::hello, &listener, Listener::on_hello);
    greeter.bind_function(Greeter::other_signal, on_other_signal);
    greeter.bind_closure(Greeter::hello, |message: &String| {
        info!(%message, "Closure slot");
    });

    greeter.hello("Hello World".to_string());
    greeter.other_signal();

    greeter.unbind_function(on_hello);
    greeter.unbind_method(&listener, Listener::on_hello);
    greeter.unbind_function(on_other_signal);

    greeter.hello("Goodbye".to_string());

    info!(stats = %serde_json::to_string(&greeter.slots().stats())?, "Object slots demo finished");
    Ok(())
}

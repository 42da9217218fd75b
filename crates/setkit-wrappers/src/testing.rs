use std::io;
use std::sync::{Arc, Mutex};

use setkit_assert::Assertions;
use setkit_provider::MockProvider;
use setkit_schema::SchemaRegistry;

use crate::caller::ContractCaller;
use crate::config::TxDefaults;

pub(crate) const TOKEN: &str = "0x1111111111111111111111111111111111111111";
pub(crate) const OWNER: &str = "0x2222222222222222222222222222222222222222";
pub(crate) const SPENDER: &str = "0x3333333333333333333333333333333333333333";
pub(crate) const CORE: &str = "0x4444444444444444444444444444444444444444";
pub(crate) const VAULT: &str = "0x5555555555555555555555555555555555555555";
pub(crate) const TRANSFER_PROXY: &str = "0x6666666666666666666666666666666666666666";
pub(crate) const SET: &str = "0x7777777777777777777777777777777777777777";
pub(crate) const REBALANCING_SET: &str = "0x8888888888888888888888888888888888888888";

pub(crate) fn assertions() -> Assertions {
    Assertions::new(Arc::new(
        SchemaRegistry::new().expect("built-in schemas should compile"),
    ))
}

/// Mock provider plus a caller sending from [`OWNER`].
pub(crate) fn setup() -> (Arc<MockProvider>, ContractCaller, Assertions) {
    let mock = Arc::new(MockProvider::new());
    let caller = ContractCaller::with_defaults(
        mock.clone(),
        TxDefaults {
            from: Some(OWNER.to_string()),
            ..TxDefaults::default()
        },
    );
    (mock, caller, assertions())
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a thread-local subscriber and return what it logged.
pub(crate) fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
    (out, logs)
}

//! Client-side walk-through of the unshared flyweight.
//!
//! Run with `FLYWEIGHT_LOG=true` to see observer output on stderr.

use flyweight_unshared::{
    ExtrinsicState, Flyweight, FlyweightResult, MetricsObserver, OperationConfig, OperationContext,
    Sharing, UnsharedConcreteFlyweight,
};
use std::sync::Arc;

/// A shared variant a client might write next to the unshared one.
struct ConcreteFlyweight {
    key: char,
}

impl Flyweight for ConcreteFlyweight {
    fn name(&self) -> &'static str {
        "ConcreteFlyweight"
    }

    fn sharing(&self) -> Sharing {
        Sharing::Shared
    }

    fn render(&self, extrinsic_state: ExtrinsicState) -> String {
        format!("ConcreteFlyweight {}: {}", self.key, extrinsic_state)
    }
}

fn main() -> FlyweightResult<()> {
    println!("Plain operation calls");
    let unshared = UnsharedConcreteFlyweight::new();
    for state in [42, 0, -7] {
        unshared.operation(state);
    }

    println!();
    println!("Through an operation context");
    let metrics = Arc::new(MetricsObserver::new());
    let context = OperationContext::from_config(&OperationConfig::from_env()?)
        .with_observer(metrics.clone());

    let flyweights: Vec<Box<dyn Flyweight>> = vec![
        Box::new(ConcreteFlyweight { key: 'X' }),
        Box::new(ConcreteFlyweight { key: 'Y' }),
        Box::new(UnsharedConcreteFlyweight::new()),
    ];

    let mut extrinsic_state = 22;
    for flyweight in &flyweights {
        extrinsic_state -= 1;
        context.invoke(&**flyweight, extrinsic_state)?;
    }
    context.invoke_all(&unshared, [1, 2])?;

    println!();
    println!(
        "{} operations, {} lines, {} failures",
        metrics.operation_count(),
        metrics.emitted_count(),
        metrics.failure_count()
    );
    if let Some(buffer) = context.sink().buffer() {
        println!("Captured in buffer:\n{}", buffer.contents());
    }
    Ok(())
}

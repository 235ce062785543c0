use flyweight_unshared::{
    ExtrinsicState, Flyweight, OperationContext, SharedBuffer, Sharing, UnsharedConcreteFlyweight,
};
use std::sync::Arc;

fn capture(states: &[ExtrinsicState]) -> String {
    let buffer = SharedBuffer::new();
    let context = OperationContext::new().with_sink(buffer.clone());
    context
        .invoke_all(&UnsharedConcreteFlyweight::new(), states.iter().copied())
        .unwrap();
    buffer.contents()
}

#[test]
fn test_forty_two() {
    assert_eq!(capture(&[42]), "UnsharedConcreteFlyweight: 42\n");
}

#[test]
fn test_zero() {
    assert_eq!(capture(&[0]), "UnsharedConcreteFlyweight: 0\n");
}

#[test]
fn test_negative() {
    assert_eq!(capture(&[-7]), "UnsharedConcreteFlyweight: -7\n");
}

#[test]
fn test_sequential_calls_keep_order() {
    assert_eq!(
        capture(&[1, 2]),
        "UnsharedConcreteFlyweight: 1\nUnsharedConcreteFlyweight: 2\n"
    );
}

#[test]
fn test_same_state_twice_gives_identical_lines() {
    let flyweight = UnsharedConcreteFlyweight::new();
    let mut out = Vec::new();

    flyweight.write_operation(5, &mut out).unwrap();
    flyweight.write_operation(5, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["UnsharedConcreteFlyweight: 5", "UnsharedConcreteFlyweight: 5"]);
    // Still the same zero-sized value afterwards
    assert_eq!(flyweight, UnsharedConcreteFlyweight::default());
}

#[test]
fn test_instances_are_interchangeable() {
    let a = UnsharedConcreteFlyweight::new();
    let b = UnsharedConcreteFlyweight::new();
    assert_eq!(a.render(-1), b.render(-1));
    assert_eq!(std::mem::size_of::<UnsharedConcreteFlyweight>(), 0);
}

#[test]
fn test_dynamic_dispatch_with_other_variant() {
    struct ConcreteFlyweight {
        intrinsic: &'static str,
    }

    impl Flyweight for ConcreteFlyweight {
        fn name(&self) -> &'static str {
            "ConcreteFlyweight"
        }

        fn sharing(&self) -> Sharing {
            Sharing::Shared
        }

        fn render(&self, extrinsic_state: ExtrinsicState) -> String {
            format!("ConcreteFlyweight[{}]: {}", self.intrinsic, extrinsic_state)
        }
    }

    let shared: Arc<dyn Flyweight> = Arc::new(ConcreteFlyweight { intrinsic: "X" });
    let flyweights: Vec<Arc<dyn Flyweight>> = vec![
        shared.clone(),
        Arc::new(UnsharedConcreteFlyweight::new()),
        shared,
    ];

    let buffer = SharedBuffer::new();
    let context = OperationContext::new().with_sink(buffer.clone());
    for (state, flyweight) in (10..).zip(&flyweights) {
        context.invoke(&**flyweight, state).unwrap();
    }

    assert_eq!(
        buffer.lines(),
        vec![
            "ConcreteFlyweight[X]: 10",
            "UnsharedConcreteFlyweight: 11",
            "ConcreteFlyweight[X]: 12",
        ]
    );
    assert_eq!(
        flyweights.iter().map(|f| f.sharing()).collect::<Vec<_>>(),
        vec![Sharing::Shared, Sharing::Unshared, Sharing::Shared]
    );
}

#[test]
fn test_invoke_into_explicit_writer() {
    let context = OperationContext::new();
    let mut out = Vec::new();

    context.invoke_into(&UnsharedConcreteFlyweight, 3, &mut out).unwrap();

    assert_eq!(out, b"UnsharedConcreteFlyweight: 3\n");
}

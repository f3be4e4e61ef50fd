use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use domain::{
    AggregateRoot, EventEnvelope, Money, Order, OrderEvent, OrderId, Product, ProductId,
    ProductName, collect_envelopes,
};

fn gbp(amount: i64) -> Money {
    Money::new(amount, "GBP").unwrap()
}

fn draft_with_lines(count: i64) -> Order {
    let mut order = Order::new(OrderId::generate());
    for n in 1..=count {
        let product = ProductId::new(format!("PROD-{n:03}")).unwrap();
        order.add_line(product, 1, gbp(100 * n)).unwrap();
    }
    order
}

fn bench_add_line(c: &mut Criterion) {
    c.bench_function("domain/add_line", |b| {
        b.iter_batched(
            || Order::new(OrderId::generate()),
            |mut order| {
                order
                    .add_line(ProductId::new("PROD-BENCH").unwrap(), 2, gbp(1000))
                    .unwrap();
                order
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_place_order(c: &mut Criterion) {
    c.bench_function("domain/place_50_lines", |b| {
        b.iter_batched(
            || draft_with_lines(50),
            |mut order| {
                order.place().unwrap();
                order
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_remove_line(c: &mut Criterion) {
    c.bench_function("domain/remove_line_from_50", |b| {
        b.iter_batched(
            || draft_with_lines(50),
            |mut order| {
                order.remove_line(25).unwrap();
                order
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_change_price(c: &mut Criterion) {
    let mut product = Product::create(
        ProductId::new("PROD-1").unwrap(),
        ProductName::new("Widget").unwrap(),
        gbp(100),
    );

    c.bench_function("domain/change_price", |b| {
        b.iter(|| {
            product.change_price(gbp(200));
            product.clear_domain_events();
        });
    });
}

fn bench_collect_envelopes(c: &mut Criterion) {
    c.bench_function("domain/collect_envelopes_order_placed", |b| {
        b.iter_batched(
            || {
                let mut order = draft_with_lines(10);
                order.place().unwrap();
                order
            },
            |mut order| collect_envelopes(&mut order).unwrap(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_decode_envelope(c: &mut Criterion) {
    let mut order = draft_with_lines(10);
    order.place().unwrap();
    let envelopes: Vec<EventEnvelope> = collect_envelopes(&mut order).unwrap();

    c.bench_function("domain/decode_order_placed", |b| {
        b.iter(|| envelopes[0].decode::<OrderEvent>().unwrap());
    });
}

criterion_group!(
    benches,
    bench_add_line,
    bench_place_order,
    bench_remove_line,
    bench_change_price,
    bench_collect_envelopes,
    bench_decode_envelope,
);
criterion_main!(benches);

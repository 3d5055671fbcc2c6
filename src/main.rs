use record_recipe::framework::WriterSink;
use record_recipe::joiner::MessageJoiner;
use record_recipe::lifecycle::setup_tracing;
use record_recipe::model::{LogRecord, Order, OrderId, OrderState};
use record_recipe::order_list;
use tracing::info;

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting record processing demo");

    // Join everything at level 2 and above onto one stdout line
    let records = vec![
        LogRecord::new(2, "disk almost full"),
        LogRecord::new(0, "heartbeat"),
        LogRecord::new(3, "disk full"),
    ];
    let mut joiner = MessageJoiner::new(2, " | ", WriterSink::lines(std::io::stdout()));

    let span = tracing::info_span!("joining");
    span.in_scope(|| joiner.log(&records)).map_err(|e| e.to_string())?;

    // Walk one order through its lifecycle
    let span = tracing::info_span!("order_processing");
    let orders = span.in_scope(|| {
        let orders = vec![Order::placed(OrderId(1)), Order::placed(OrderId(2))];
        let orders = order_list::process(orders, &OrderId(1), OrderState::Processing);
        // No transition is defined for this label, so nothing changes
        let orders = order_list::process(orders, &OrderId(1), "Shipped".into());
        order_list::process(orders, &OrderId(1), OrderState::Delivered)
    });

    info!(remaining = orders.len(), "Order processing finished");
    for order in &orders {
        info!(id = %order.id, state = %order.state, "Open order");
    }

    info!("Demo completed successfully");
    Ok(())
}

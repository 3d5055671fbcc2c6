use record_recipe::framework::Disposition;
use record_recipe::model::{Order, OrderId, OrderState};
use record_recipe::order_list::{self, OrderError};

fn orders_from_json(json: &str) -> Vec<Order> {
    serde_json::from_str(json).expect("orders should deserialize")
}

/// Full lifecycle over a list decoded from JSON: process, ignore, deliver.
#[test]
fn test_order_lifecycle() {
    let orders = orders_from_json(
        r#"[{"id":1,"state":"Placed"},{"id":2,"state":"Placed"},{"id":3,"state":"Placed"}]"#,
    );

    // 1. Processing keeps the position
    let orders = order_list::process(orders, &OrderId(2), OrderState::Processing);
    assert_eq!(orders[1], Order::new(OrderId(2), OrderState::Processing));
    assert_eq!(orders.len(), 3);

    // 2. Unknown label and unknown id change nothing
    let before = orders.clone();
    let orders = order_list::process(orders, &OrderId(2), "Cancelled".into());
    let orders = order_list::process(orders, &OrderId(42), OrderState::Delivered);
    assert_eq!(orders, before);

    // 3. Delivered removes exactly one, order preserved
    let orders = order_list::process(orders, &OrderId(2), OrderState::Delivered);
    let ids: Vec<OrderId> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![OrderId(1), OrderId(3)]);

    let json = serde_json::to_string(&orders).unwrap();
    assert_eq!(json, r#"[{"id":1,"state":"Placed"},{"id":3,"state":"Placed"}]"#);
}

/// The strict form explains each no-op and leaves the list intact.
#[test]
fn test_strict_transition_errors() {
    let mut orders = vec![Order::placed(OrderId(1))];

    let err = order_list::transition(&mut orders, &OrderId(5), OrderState::Processing).unwrap_err();
    assert_eq!(err, OrderError::NotFound("order_5".into()));
    assert_eq!(err.to_string(), "Order not found: order_5");

    let err = order_list::transition(&mut orders, &OrderId(1), "Returned".into()).unwrap_err();
    assert_eq!(err, OrderError::UnsupportedState("Returned".into()));

    assert_eq!(orders, vec![Order::placed(OrderId(1))]);

    assert_eq!(
        order_list::transition(&mut orders, &OrderId(1), OrderState::Processing),
        Ok(Disposition::Keep)
    );
    // Processing twice is stable
    assert_eq!(
        order_list::transition(&mut orders, &OrderId(1), OrderState::Processing),
        Ok(Disposition::Keep)
    );
    assert_eq!(orders[0].state, OrderState::Processing);
}

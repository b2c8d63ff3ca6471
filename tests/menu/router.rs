use qol_launcher::menu::{EventRouter, NodeId};
use tokio::sync::mpsc::error::TryRecvError;

#[test]
fn route_delivers_to_registered_id_only() {
    // Arrange
    let router = EventRouter::new();
    let mut echo = router.register(NodeId::from("echo"));
    let mut quit = router.register(NodeId::from("quit"));

    // Act
    let routed = router.route("echo");

    // Assert
    assert!(routed);
    assert_eq!(echo.try_recv(), Ok(()));
    assert_eq!(quit.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn route_matches_whole_id_not_prefix() {
    let cases = [("ech", false), ("echo", true), ("echo2", false), ("", false)];

    for (event, expected) in cases {
        // Arrange
        let router = EventRouter::new();
        let _rx = router.register(NodeId::from("echo"));

        // Act
        let routed = router.route(event);

        // Assert
        assert_eq!(routed, expected, "event {:?}", event);
    }
}

#[test]
fn each_activation_is_delivered_once() {
    // Arrange
    let router = EventRouter::new();
    let mut rx = router.register(NodeId::from("echo"));

    // Act
    for _ in 0..3 {
        router.route("echo");
    }

    // Assert
    let mut received = 0;
    while rx.try_recv().is_ok() {
        received += 1;
    }
    assert_eq!(received, 3);
}

#[test]
fn unregister_closes_the_stream() {
    // Arrange
    let router = EventRouter::new();
    let id = NodeId::from("echo");
    let mut rx = router.register(id.clone());

    // Act
    let removed = router.unregister(&id);
    let routed = router.route("echo");

    // Assert
    assert!(removed);
    assert!(!routed);
    assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    assert!(router.is_empty());
}

#[test]
fn unregister_unknown_id_is_a_no_op() {
    let router = EventRouter::new();

    assert!(!router.unregister(&NodeId::from("ghost")));
}

#[test]
fn reregistering_replaces_the_earlier_stream() {
    // Arrange
    let router = EventRouter::new();
    let id = NodeId::from("echo");
    let mut first = router.register(id.clone());
    let mut second = router.register(id);

    // Act
    router.route("echo");

    // Assert
    assert_eq!(first.try_recv(), Err(TryRecvError::Disconnected));
    assert_eq!(second.try_recv(), Ok(()));
    assert_eq!(router.len(), 1);
}

#[test]
fn dead_listener_route_is_dropped() {
    // Arrange
    let router = EventRouter::new();
    let rx = router.register(NodeId::from("echo"));
    drop(rx);

    // Act
    let routed = router.route("echo");

    // Assert
    assert!(!routed);
    assert!(router.is_empty());
}

#[test]
fn clones_share_routes() {
    // Arrange
    let router = EventRouter::new();
    let clone = router.clone();
    let mut rx = router.register(NodeId::from("echo"));

    // Act
    let routed = clone.route("echo");

    // Assert
    assert!(routed);
    assert_eq!(rx.try_recv(), Ok(()));
}

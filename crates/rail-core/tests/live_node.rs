use std::env;
use std::sync::Once;

use rail_core::amount::Unit;
use rail_core::rpc::Client;

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rail_core=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

fn digits_only(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires a reachable ledger node; set RAIL_TEST_NODE_URL"]
async fn live_node_answers_read_only_queries() {
    init_tracing();

    let node_url = env::var("RAIL_TEST_NODE_URL").expect("RAIL_TEST_NODE_URL must be set");
    let client = Client::new(Some(&node_url));

    eprintln!("[itest] checking version against {node_url}");
    let version = client.version().await.expect("version must succeed");
    assert!(!version.node_vendor.is_empty());

    let count = client.block_count().await.expect("block_count must succeed");
    assert!(
        digits_only(&count.count),
        "block count must be a digit string, got `{}`",
        count.count
    );

    let supply = client
        .available_supply(Unit::Raw)
        .await
        .expect("available_supply must succeed");
    assert!(digits_only(&supply));

    let in_mega = client
        .available_supply(Unit::Mega)
        .await
        .expect("available_supply must succeed");
    assert!(digits_only(&in_mega));

    let frontier_count = client
        .frontier_count()
        .await
        .expect("frontier_count must succeed");
    assert!(digits_only(&frontier_count));
}

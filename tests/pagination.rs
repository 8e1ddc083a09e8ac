mod common;

use awx_mcp::awx::api::{AwxApiError, Host};
use awx_mcp::awx::{HOST_PAGE_SIZE, PageRequest, collect_all_pages, fetch_all_hosts};
use common::{ScriptedTransport, host_pages};
use proptest::prelude::*;
use serde_json::json;

fn script_pages(transport: &ScriptedTransport, total: u64, page_size: u64) {
    for page in host_pages(total, page_size) {
        transport.push_page(Ok(page));
    }
}

#[tokio::test]
async fn test_fetch_all_hosts_walks_every_page() {
    let transport = ScriptedTransport::new();
    script_pages(&transport, 450, 200);

    let hosts = fetch_all_hosts(&transport, 7).await.unwrap();

    assert_eq!(hosts.len(), 450);
    assert_eq!(hosts.first().map(|h| h.id), Some(1));
    assert_eq!(hosts.last().map(|h| h.id), Some(450));
    assert!(hosts.windows(2).all(|w| w[0].id < w[1].id));

    let calls = transport.page_calls();
    assert_eq!(calls.len(), 3);
    for (index, (endpoint, request)) in calls.iter().enumerate() {
        assert_eq!(endpoint, "inventories/7/hosts/");
        assert_eq!(
            *request,
            PageRequest {
                page: index as u32 + 1,
                page_size: HOST_PAGE_SIZE,
            }
        );
    }
}

#[tokio::test]
async fn test_empty_inventory_fetches_one_page() {
    let transport = ScriptedTransport::new();
    script_pages(&transport, 0, 200);

    let hosts = fetch_all_hosts(&transport, 3).await.unwrap();

    assert!(hosts.is_empty());
    assert_eq!(transport.page_calls().len(), 1);
}

#[tokio::test]
async fn test_blank_next_link_ends_walk() {
    let transport = ScriptedTransport::new();
    transport.push_page(Ok(json!({
        "count": 1,
        "next": "",
        "results": [common::host(11)],
    })));

    let hosts = fetch_all_hosts(&transport, 3).await.unwrap();

    assert_eq!(hosts.len(), 1);
    assert_eq!(transport.page_calls().len(), 1);
}

#[tokio::test]
async fn test_error_mid_walk_discards_collected_hosts() {
    let transport = ScriptedTransport::new();
    let mut pages = host_pages(450, 200).into_iter();
    transport.push_page(Ok(pages.next().unwrap()));
    transport.push_page(Err(AwxApiError::AuthFailed));

    let err = fetch_all_hosts(&transport, 7).await.unwrap_err();

    assert!(matches!(err, AwxApiError::AuthFailed));
    assert_eq!(transport.page_calls().len(), 2);
}

#[tokio::test]
async fn test_collect_all_pages_with_custom_page_size() {
    let transport = ScriptedTransport::new();
    script_pages(&transport, 5, 2);

    let hosts: Vec<Host> = collect_all_pages(&transport, "hosts/", 2).await.unwrap();

    assert_eq!(hosts.len(), 5);
    let pages: Vec<u32> = transport
        .page_calls()
        .iter()
        .map(|(_, request)| request.page)
        .collect();
    assert_eq!(pages, vec![1, 2, 3]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_walk_returns_every_record_in_order(total in 0u64..1000, page_size in 1u64..250) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        let transport = ScriptedTransport::new();
        script_pages(&transport, total, page_size);

        let hosts: Vec<Host> = runtime
            .block_on(collect_all_pages(&transport, "hosts/", page_size as u32))
            .unwrap();

        let ids: Vec<u64> = hosts.iter().map(|h| h.id).collect();
        let expected: Vec<u64> = (1..=total).collect();
        prop_assert_eq!(ids, expected);

        let expected_fetches = if total == 0 { 1 } else { total.div_ceil(page_size) };
        prop_assert_eq!(transport.page_calls().len() as u64, expected_fetches);
    }
}

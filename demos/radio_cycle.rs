//! Drive a radio through a TX and an RX cycle on the async service.

use radio_fsm::radio::EventKind;
use radio_fsm::{Action, Radio, RadioConfig, RadioService};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = RadioConfig::default()
        .trigger_on_end(true)
        .time_unit(Duration::from_millis(5));
    let ramp_up = config.units(radio_fsm::core::RAMP_UP_DELAY) + Duration::from_millis(5);

    let radio = Radio::new(config)?.with_interrupt_hook(|| println!("  interrupt: END"));
    let (handle, service) = RadioService::spawn(radio);

    println!("TX cycle");
    handle.enable_tx(true).await?;
    println!("  after TASKS_TXEN: {}", handle.state().await?);
    tokio::time::sleep(ramp_up).await;
    println!("  after ramp-up: {}", handle.state().await?);
    handle.start(true).await?;
    handle.apply_action(Action::Address).await?;
    handle.apply_action(Action::End).await?;
    handle.disable(true).await?;
    handle.apply_action(Action::Disabled).await?;
    println!("  back to {}", handle.state().await?);

    println!("RX cycle");
    handle.enable_rx(true).await?;
    tokio::time::sleep(ramp_up).await;
    handle.start(true).await?;
    handle.apply_action(Action::Payload).await?;
    handle.apply_action(Action::RxStop).await?;
    println!("  after RX_STOP: {}", handle.state().await?);

    if let Err(err) = handle.apply_action(Action::Stop).await {
        println!("  rejected: {err}");
    }

    for kind in radio_fsm::radio::ALL_EVENTS {
        println!("  {kind}: {}", handle.read_event(kind).await?);
    }
    handle.set_event(EventKind::End, false).await?;

    drop(handle);
    let radio = service.await?;
    println!("path: {:?}", radio.history().get_path());
    Ok(())
}

use crate::cli::Args;
use crate::device::LiveTestbed;
use crate::query::{device_info, QueryOptions};
use crate::QueryError;
use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use testbed::Testbed;

/// Testbed name of the DevNet always-on sandbox.
pub const SANDBOX_TESTBED: &str = "DevNet_Always_On_Sandbox_Devices";

/// Devices queried on the sandbox testbed, in order: the NX-OS switch, then the CSR1000v.
pub const SANDBOX_DEVICES: [&str; 2] = ["sbx-n9kv-ao", "csr1000v-1"];

/// Names of the devices a run queries, in order. The sandbox testbed always gets its two
/// known devices, whatever else it lists; any other testbed gets all of its devices.
pub fn target_devices(testbed: &LiveTestbed) -> Vec<String> {
    if is_sandbox(testbed) {
        SANDBOX_DEVICES.iter().map(|d| d.to_string()).collect()
    } else {
        testbed
            .device_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

fn is_sandbox(testbed: &LiveTestbed) -> bool {
    testbed.name == SANDBOX_TESTBED
}

/// Summary of a freshly loaded testbed. Passwords stay masked in the `Debug` output.
pub fn print_testbed_info(testbed: &Testbed) {
    println!("\n======= TESTBED INFO =======\n");
    println!("\tTestbed Value (object): {:?}", testbed);
    println!("\tTestbed Name: \n\t\t{}", testbed.name);
    println!("\tTestbed Devices: \n\t\t{:?}", testbed.device_names());
    println!("\tNumber of Testbed Links: \n\t\t{}", testbed.links.len());
    println!("\tNumber of Testbed Devices: \n\t\t{}", testbed.devices.len());
    println!("\n======= END TESTBED INFO =======\n");
}

/// Query every target device in turn. The first failure ends the run.
pub async fn query_devices(
    testbed: &mut LiveTestbed,
    options: &QueryOptions,
) -> Result<Vec<(String, Value)>, QueryError> {
    let sandbox = is_sandbox(testbed);
    let mut results = vec![];

    for name in target_devices(testbed) {
        if !sandbox {
            println!("\n>>>>>>> DEVICE {name}");
        }
        let (_, response) = device_info(&name, testbed, options).await?;
        results.push((name, response));
    }

    Ok(results)
}

/// Load the testbed named on the command line and query its devices.
pub async fn run(args: &Args) -> Result<()> {
    let testbed = testbed::load(&args.testbed_file).with_context(|| {
        format!(
            "loading testbed from {}",
            args.testbed_file.to_string_lossy()
        )
    })?;
    print_testbed_info(&testbed);
    let mut testbed = LiveTestbed::new(testbed);

    let options = args.query_options();
    debug!("Query options: {:?}", options);

    let results = query_devices(&mut testbed, &options)
        .await
        .with_context(|| format!("running '{}' on testbed {}", options.command, testbed.name))?;
    info!("Queried {} device(s)", results.len());

    testbed.disconnect_all().await;
    Ok(())
}

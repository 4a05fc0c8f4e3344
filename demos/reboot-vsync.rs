// SPDX-License-Identifier: Apache-2.0
//! Reboot the Lepton and make sure VSYNC output is enabled on GPIO3.
//!
//! Run this once at startup before handing the camera to the frame-capture
//! path: the reboot clears any wedged command state, and the VSYNC pulse is
//! what the capture side synchronises to.

use std::process::exit;

use linux_embedded_hal::{Delay, I2cdev};
use log::{error, info};

use lepton_cci::{CciDriver, GpioMode, CCI_ADDRESS};

const I2C_DEVICE: &str = "/dev/i2c-2";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    info!("opening I2C device {}", I2C_DEVICE);
    let bus = match I2cdev::new(I2C_DEVICE) {
        Ok(bus) => bus,
        Err(open_error) => {
            error!(
                "failed to open {}: {} - check permissions & i2c enabled",
                I2C_DEVICE, open_error
            );
            exit(-1);
        }
    };
    let mut camera = CciDriver::new(bus, CCI_ADDRESS)?;

    // Reboot the Lepton in case it's in a funny state.
    info!("starting reboot...");
    let mut delay = Delay;
    camera.run_reboot(&mut delay);
    info!("  done");

    let mode = camera.gpio_mode()?;
    info!("GPIO3 mode = {:?}", mode);
    if mode != GpioMode::Vsync {
        info!("enabling VSYNC...");
        camera.set_gpio_mode(GpioMode::Vsync);
    } else {
        info!("already enabled...");
    }
    let mode = camera.gpio_mode()?;
    info!("GPIO3 mode = {:?}", mode);

    Ok(())
}

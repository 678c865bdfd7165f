// libpn532-rs/libpn532/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, info, warn};

use crate::device::channel::CommandChannel;
use crate::device::config::DeviceConfig;
use crate::protocol::{Command, Detection, EmulationProfile, Response, SamConfig, TargetActivation};
use crate::transport::Transport;
use crate::types::{CardType, FirmwareVersion, TargetNumber};
use crate::{ChannelError, Error, Result};

/// Type-state markers
pub struct Disconnected;
pub struct Ready;

/// Where the session currently is. `Connecting` is only observable
/// while `connect` runs; the polling modes return to `Ready` when done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Phase {
    Disconnected,
    Connecting,
    Ready,
    Polling,
    Exchanging,
    Emulating,
}

/// Connection state changed only by explicit command-set calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub connected: bool,
    pub sam_configured: bool,
    pub active_target: Option<TargetNumber>,
}

/// Session handle that enforces the wake/firmware step at compile time.
/// It exclusively owns its transport.
pub struct Device<State = Disconnected> {
    channel: CommandChannel,
    config: DeviceConfig,
    session: SessionState,
    phase: Phase,
    firmware: Option<FirmwareVersion>,
    _state: PhantomData<State>,
}

impl<S> Device<S> {
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn into_state<T>(self) -> Device<T> {
        Device {
            channel: self.channel,
            config: self.config,
            session: self.session,
            phase: self.phase,
            firmware: self.firmware,
            _state: PhantomData,
        }
    }
}

impl Device<Disconnected> {
    /// Create a Device from an existing Transport instance. No bytes are
    /// exchanged until `connect`.
    pub fn new(transport: Box<dyn Transport>, config: DeviceConfig) -> Self {
        let channel = CommandChannel::new(
            transport,
            config.read_timeout_ms,
            config.logging.frame_level,
        );
        Self {
            channel,
            config,
            session: SessionState::default(),
            phase: Phase::Disconnected,
            firmware: None,
            _state: PhantomData,
        }
    }

    /// Settle, wake the chip and query its firmware. Only a successful
    /// firmware query yields a ready session.
    pub fn connect(mut self) -> Result<Device<Ready>> {
        self.phase = Phase::Connecting;
        std::thread::sleep(self.config.wake.settle_delay);

        if let Err(e) = self.channel.wake(&self.config.wake) {
            warn!("wake sequence failed: {}", e);
            self.phase = Phase::Disconnected;
            return Err(e);
        }

        let frame = match self.channel.send_command(Command::GetFirmwareVersion.opcode(), &[]) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("firmware query failed: {}", e);
                self.phase = Phase::Disconnected;
                return Err(e);
            }
        };
        let firmware = match Response::from_frame(Command::GetFirmwareVersion.opcode(), &frame)? {
            Response::FirmwareVersion(fw) => fw,
            other => return Err(unexpected(&other)),
        };
        info!("PN532 firmware {}", firmware);

        self.firmware = Some(firmware);
        self.session.connected = true;
        self.phase = Phase::Ready;
        Ok(self.into_state())
    }
}

fn unexpected(resp: &Response) -> Error {
    Error::InvalidState(format!(
        "unexpected response for command {:#04x}: {:?}",
        resp.opcode(),
        resp
    ))
}

impl Device<Ready> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        let opcode = cmd.opcode();
        let frame = self.channel.send_command(opcode, &cmd.params())?;
        let response = Response::from_frame(opcode, &frame)?;
        debug!("decoded {:#04x}: {:?}", opcode, response);
        Ok(response)
    }

    /// Firmware reported during `connect`.
    pub fn firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Query the firmware again.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.execute(&Command::GetFirmwareVersion)? {
            Response::FirmwareVersion(fw) => {
                self.firmware = Some(fw);
                Ok(fw)
            }
            other => Err(unexpected(&other)),
        }
    }

    /// Configure the Security Access Module. Without a usable reply the
    /// configuration is reported as failed.
    pub fn sam_configuration(&mut self, config: &SamConfig) -> Result<()> {
        match self.execute(&Command::SamConfiguration(*config)) {
            Ok(_) => {
                self.session.sam_configured = true;
                info!("SAM configured ({:?})", config.mode);
                Ok(())
            }
            Err(Error::Channel(e)) => Err(Error::SamConfigurationFailed(e)),
            Err(Error::Frame(e)) => Err(Error::SamConfigurationFailed(
                ChannelError::InvalidResponse(e),
            )),
            Err(e) => Err(e),
        }
    }

    /// Look for passive targets. An empty field is `Detection::NoTarget`.
    /// Any detection supersedes the previously active target.
    pub fn in_list_passive_target(
        &mut self,
        max_targets: u8,
        card_type: CardType,
    ) -> Result<Detection> {
        let cmd = Command::InListPassiveTarget {
            max_targets,
            card_type,
        };
        match self.execute(&cmd)? {
            Response::PassiveTarget(detection) => {
                self.session.active_target = match &detection {
                    Detection::Found(t) => {
                        info!(
                            "target {} found: UID {} ATQA {} SAK {}",
                            t.number(),
                            t.uid().to_hex(),
                            t.atqa().to_hex(),
                            t.sak()
                        );
                        Some(t.number())
                    }
                    Detection::NoTarget => None,
                };
                Ok(detection)
            }
            other => Err(unexpected(&other)),
        }
    }

    /// Exchange an APDU with target `target`. A non-zero status byte is
    /// `ChipError::ExchangeFailed` and no payload is returned.
    pub fn in_data_exchange(&mut self, target: TargetNumber, apdu: &[u8]) -> Result<Vec<u8>> {
        let cmd = Command::InDataExchange {
            target,
            apdu: apdu.to_vec(),
        };
        match self.execute(&cmd)? {
            Response::DataExchange(data) => Ok(data),
            other => Err(unexpected(&other)),
        }
    }

    /// Release `target`. Fire-and-forget: failures are logged, not
    /// returned. Returns the chip's status byte when it answered.
    pub fn in_release(&mut self, target: TargetNumber) -> Option<u8> {
        if self.session.active_target == Some(target) {
            self.session.active_target = None;
        }
        match self.execute(&Command::InRelease { target }) {
            Ok(Response::Released { status }) => {
                debug!("target {} released (status {:#04x})", target, status);
                Some(status)
            }
            Ok(other) => {
                warn!("release of target {}: {}", target, unexpected(&other));
                None
            }
            Err(e) => {
                warn!("release of target {} failed: {}", target, e);
                None
            }
        }
    }

    /// Put the chip into target (card emulation) mode.
    pub fn tg_init_as_target(&mut self, profile: &EmulationProfile) -> Result<TargetActivation> {
        match self.execute(&Command::TgInitAsTarget(profile.clone())) {
            Ok(Response::TargetInitialized(activation)) => {
                info!("emulation active (mode {:?})", activation.mode);
                Ok(activation)
            }
            Ok(other) => Err(unexpected(&other)),
            Err(Error::Channel(e)) => Err(Error::EmulationFailed(e)),
            Err(e) => Err(e),
        }
    }

    /// Fetch the next command from the external reader, if any arrived.
    pub fn tg_get_data(&mut self) -> Result<Option<Vec<u8>>> {
        match self.execute(&Command::TgGetData)? {
            Response::TargetData(data) => Ok(data),
            other => Err(unexpected(&other)),
        }
    }

    /// Send a reply to the external reader.
    pub fn tg_set_data(&mut self, data: &[u8]) -> Result<()> {
        match self.execute(&Command::TgSetData(data.to_vec()))? {
            Response::TargetDataSent => Ok(()),
            other => Err(unexpected(&other)),
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        debug!("phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    /// Close the transport and return to the disconnected state. The
    /// returned handle can `connect` again.
    pub fn disconnect(mut self) -> Result<Device<Disconnected>> {
        let closed = self.channel.close();
        self.session = SessionState::default();
        self.phase = Phase::Disconnected;
        self.firmware = None;
        closed?;
        Ok(self.into_state())
    }
}

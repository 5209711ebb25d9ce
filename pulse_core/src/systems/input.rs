use glam::Vec2;
use hecs::World;

use crate::systems::trigger_pulse;
use crate::{Command, Config, Events, InputQueue, Motion, Paddle, Player, PlayerKind, Side, Time};

/// Apply queued commands to the human-controlled paddles
pub fn ingest_inputs(
    world: &mut World,
    inputs: &mut InputQueue,
    time: &Time,
    config: &Config,
    events: &mut Events,
) {
    let mut pulses: Vec<Side> = Vec::new();

    for (side, command) in inputs.drain() {
        for (_entity, (motion, paddle, player)) in
            world.query_mut::<(&mut Motion, &mut Paddle, &Player)>()
        {
            if paddle.side != side {
                continue;
            }
            if player.kind != PlayerKind::Human {
                log::debug!("ignoring {command:?} for {side:?}: paddle is {:?}", player.kind);
                break;
            }

            match command {
                Command::MoveUp => motion.direction = Vec2::new(0.0, -1.0),
                Command::MoveDown => motion.direction = Vec2::new(0.0, 1.0),
                Command::Stop => motion.direction = Vec2::ZERO,
                Command::Pulse => {
                    // Only a paddle that has just returned the ball can pulse it
                    if paddle.hit {
                        paddle.pulsed = true;
                        pulses.push(side);
                    }
                }
            }
            break;
        }
    }

    for side in pulses {
        trigger_pulse(world, time.now_ms + config.pulse_duration_ms);
        events.pulses.push(side);
    }
}

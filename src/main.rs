use anyhow::bail;
use clap::Parser;

use fov::{CosineDomain, SightCone};
use util::{Angle, Vector2};

pub const APP_NAME: &str = "sightline";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = "Check which points an observer can see")]
struct Args {
    #[arg(
        long,
        default_value = "0,0",
        allow_hyphen_values = true,
        help = "Observer position as x,y"
    )]
    position: Vector2,

    #[arg(
        long,
        default_value = "0,1",
        allow_hyphen_values = true,
        help = "Facing direction as x,y"
    )]
    facing: Vector2,

    #[arg(long, default_value = "180", help = "Field of view in degrees")]
    fov: Angle,

    #[arg(long, help = "View distance, unbounded when omitted")]
    range: Option<f32>,

    #[arg(long, help = "Pass out-of-range cosines to arc cosine unclamped")]
    unclamped: bool,

    #[arg(required = true, allow_hyphen_values = true, help = "Targets as x,y")]
    targets: Vec<Vector2>,
}

impl Args {
    fn sight_cone(&self) -> anyhow::Result<SightCone> {
        let range = self.range.unwrap_or(f32::MAX);
        if range.is_nan() {
            bail!("view distance is not a number");
        }

        let domain = if self.unclamped {
            CosineDomain::Unclamped
        } else {
            CosineDomain::Clamped
        };

        let cone = SightCone::new(
            self.position,
            self.facing,
            self.fov.radians(),
            range,
        );
        Ok(cone.with_cosine_domain(domain))
    }
}

fn describe(cone: &SightCone, target: Vector2) -> String {
    if cone.can_see(target) {
        format!("{target} visible")
    } else {
        format!("{target} hidden")
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cone = args.sight_cone()?;
    log::info!(
        "observer at {} facing {}, field of view {} degrees, range {}",
        cone.position(),
        cone.orientation(),
        args.fov,
        cone.view_distance()
    );

    for &target in &args.targets {
        println!("{}", describe(&cone, target));
    }

    Ok(())
}

use std::env;
use std::ffi::OsStr;

use log::{error, info};
use seahorse::{App, Command, Context, Flag};

use conges::input::Plan;
use conges::render;
use conges::time::Year;
use conges::vacation_overview;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use core::fmt;

    use anyhow::Context as _;
    use log::error;
    use seahorse::{Command, Context};

    type TryAction<E> = fn(_: &Context) -> Result<(), E>;

    pub trait ErrorLike: Send + Sync + fmt::Debug + 'static {}

    impl<E: Send + Sync + fmt::Debug + 'static> ErrorLike for E {}

    pub trait TryActionExt {
        #[must_use]
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike;
    }

    impl TryActionExt for Command {
        fn try_action<E>(self, action: TryAction<E>) -> Self
        where
            E: ErrorLike,
        {
            self.action(move |context: &Context| {
                if let Err(e) = action(context) {
                    error!("{:?}", e);
                    ::std::process::exit(1);
                }
            })
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_int_flag(&self, name: &str) -> Result<isize, anyhow::Error> {
            self.context()
                .int_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{ContextExt, TryActionExt};

fn load_plan(context: &Context) -> anyhow::Result<Plan> {
    match context.string_flag("plan") {
        Ok(path) => {
            info!("loading plan from \"{}\"", path);
            Plan::from_toml_file(path)
        }
        Err(_) => Ok(Plan::default()),
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let calendar_command = Command::new("calendar")
        .usage(format!("{} calendar [args]", args[0]))
        .description("Prints the year calendar with the marked vacation and the balance.")
        .flag(Flag::new("year", seahorse::FlagType::Int).description("The year to render."))
        .flag(
            Flag::new("plan", seahorse::FlagType::String)
                .description("[optional] Path to a vacation plan file. Default: empty plan"),
        )
        .try_action(|context: &Context| -> anyhow::Result<()> {
            let year = context.required_int_flag("year")?;
            let plan = load_plan(context)?;

            println!("{}", vacation_overview(&plan, Year::new(year as usize)));

            Ok(())
        });

    let balance_command = Command::new("balance")
        .usage(format!("{} balance [args]", args[0]))
        .description("Prints only the balance summary.")
        .flag(
            Flag::new("plan", seahorse::FlagType::String)
                .description("[optional] Path to a vacation plan file. Default: empty plan"),
        )
        .flag(
            Flag::new("hours", seahorse::FlagType::Int)
                .description("[optional] Overrides the total entitlement in hours."),
        )
        .try_action(|context: &Context| -> anyhow::Result<()> {
            let plan = load_plan(context)?;
            let mut ledger = plan.build_ledger();

            if let Ok(hours) = context.int_flag("hours") {
                ledger.set_total_hours(hours as u32);
            }

            print!("{}", render::render_balance(&ledger.balance()));

            Ok(())
        });

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .command(calendar_command)
        .command(balance_command);

    app.run(args);

    Ok(())
}

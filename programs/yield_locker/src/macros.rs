#[macro_export]
macro_rules! validate {
        ($assert:expr, $err:expr) => {{
            if ($assert) {
                Ok(())
            } else {
                let error_code: ErrorCode = $err;
                msg!("Error {} thrown at {}:{}", error_code, file!(), line!());
                Err(error_code)
            }
        }};
        ($assert:expr, $err:expr, $($arg:tt)+) => {{
        if ($assert) {
            Ok(())
        } else {
            let error_code: ErrorCode = $err;
            msg!("Error {} thrown at {}:{}", error_code, file!(), line!());
            msg!($($arg)*);
            Err(error_code)
        }
    }};
}

#[macro_export]
macro_rules! declare_locker_seeds {
    ( $locker_loader:expr, $name: ident ) => {
        let locker = $locker_loader.load()?;
        let name = locker.name;
        let bump = locker.bump;
        let $name = &[&Locker::get_locker_signer_seeds(&name, &bump)[..]];
        drop(locker);
    };
}

#[macro_export]
macro_rules! declare_distributor_seeds {
    ( $distributor_loader:expr, $name: ident ) => {
        let distributor = $distributor_loader.load()?;
        let name = distributor.name;
        let bump = distributor.bump;
        let $name = &[&Distributor::get_distributor_signer_seeds(&name, &bump)[..]];
        drop(distributor);
    };
}

#[macro_export]
macro_rules! assert_eq_within {
    ($a:expr, $b:expr, $tolerance:expr) => {{
        let a = $a;
        let b = $b;
        let diff = if a > b { a - b } else { b - a };
        assert!(
            diff <= $tolerance,
            "{} and {} differ by {} (tolerance {})",
            a,
            b,
            diff,
            $tolerance
        );
    }};
}

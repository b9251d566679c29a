/// Anything that can be invoked once with an argument tuple.
///
/// Implemented for every `FnOnce` taking up to eight arguments, with the
/// arguments packed as a tuple: a `fn(i32) -> i32` is `Callable<(i32,)>`, a
/// zero-argument closure is `Callable<()>`.
pub trait Callable<Args> {
    type Output;

    fn call_with(self, args: Args) -> Self::Output;
}

macro_rules! impl_callable {
    () => {
        impl<Func, Ret> Callable<()> for Func
        where
            Func: FnOnce() -> Ret,
        {
            type Output = Ret;

            fn call_with(self, _args: ()) -> Ret {
                self()
            }
        }
    };
    ($head:ident $($tail:ident)*) => {
        impl<Func, Ret, $head, $($tail,)*> Callable<($head, $($tail,)*)> for Func
        where
            Func: FnOnce($head, $($tail),*) -> Ret,
        {
            type Output = Ret;

            fn call_with(self, args: ($head, $($tail,)*)) -> Ret {
                #[allow(non_snake_case)]
                let ($head, $($tail,)*) = args;
                self($head, $($tail),*)
            }
        }

        impl_callable!($($tail)*);
    };
}

impl_callable!(A B C D E F G H);

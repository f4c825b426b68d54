pub mod configuration;

pub mod checked {
    pub mod domainerror;
    pub mod strict;
}

pub mod elementary {
    pub mod primitive;
    pub mod exponential;
    pub mod logarithm;
    pub mod trigonometric;
    pub mod hyperbolic;
    pub mod inverse;
}

pub mod integration {
    pub mod trapezoid;
    pub mod simpson;
    pub mod gausslegendre;
    pub mod adaptivesimpson;
    pub mod romberg;
    pub mod quadrature;
    pub mod quadraturerulemanager;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod special {
    pub mod gamma;
    pub mod bessel;
    pub mod errorfunction;
    pub mod zeta;
}

#[cfg(test)]
mod testing;

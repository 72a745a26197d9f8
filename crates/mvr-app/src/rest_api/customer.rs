use crate::{crud_api, value_router};
use mvr_dal::customer::{CreateCustomer, CustomerRepository};

crud_api!(CustomerRepository, CreateCustomer);

value_router!();

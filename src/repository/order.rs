use diesel::prelude::*;

use crate::{
    domain::order::{NewOrder as DomainNewOrder, Order as DomainOrder, OrderListQuery},
    domain::product::Product as DomainProduct,
    models::order::{NewOrder as DbNewOrder, Order as DbOrder},
    models::product::Product as DbProduct,
    repository::{DieselRepository, OrderReader, OrderWriter, RepositoryError, RepositoryResult},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        Ok(order.map(Into::into))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let mut items = orders::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(buyer_email) = query.buyer_email.as_ref() {
            items = items.filter(orders::buyer_email.eq(buyer_email));
        }

        let db_orders = items.order(orders::id.asc()).load::<DbOrder>(&mut conn)?;

        Ok(db_orders.into_iter().map(Into::into).collect())
    }
}

impl OrderWriter for DieselRepository {
    fn place_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{orders, products};

        let mut conn = self.conn()?;

        // IMMEDIATE takes the write lock up front so the stock decrement and the
        // order insert commit as one unit.
        conn.immediate_transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let quantity = new_order.quantity;

            let target = products::table
                .filter(products::id.eq(new_order.product_id))
                .filter(products::min_qty.le(quantity))
                .filter(products::main_quantity.ge(quantity));

            let product = diesel::update(target)
                .set(products::main_quantity.eq(products::main_quantity - quantity))
                .get_result::<DbProduct>(conn)
                .optional()?;

            let Some(product) = product else {
                let exists = diesel::select(diesel::dsl::exists(
                    products::table.filter(products::id.eq(new_order.product_id)),
                ))
                .get_result::<bool>(conn)?;

                return Err(if exists {
                    RepositoryError::StockConflict
                } else {
                    RepositoryError::NotFound
                });
            };

            let product = DomainProduct::from(product);
            let db_new =
                DbNewOrder::from_parts(new_order, &product).ok_or(RepositoryError::TotalOverflow)?;

            let created = diesel::insert_into(orders::table)
                .values(&db_new)
                .get_result::<DbOrder>(conn)?;

            Ok(created.into())
        })
    }

    fn cancel_order(&self, order_id: i32) -> RepositoryResult<DomainOrder> {
        use crate::schema::{orders, products};

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let order = orders::table
                .filter(orders::id.eq(order_id))
                .first::<DbOrder>(conn)
                .optional()?
                .ok_or(RepositoryError::NotFound)?;

            // Stock is read back as i32, so the restored value must stay in range.
            let target = products::table
                .filter(products::id.eq(order.product_id))
                .filter(products::main_quantity.le(i32::MAX - order.quantity));

            let restored = diesel::update(target)
                .set(products::main_quantity.eq(products::main_quantity + order.quantity))
                .execute(conn)?;

            if restored == 0 {
                let exists = diesel::select(diesel::dsl::exists(
                    products::table.filter(products::id.eq(order.product_id)),
                ))
                .get_result::<bool>(conn)?;

                if exists {
                    return Err(RepositoryError::StockOverflow);
                }

                log::warn!(
                    "Product {} of order {} no longer exists, stock not restored",
                    order.product_id,
                    order.id
                );
            }

            diesel::delete(orders::table.filter(orders::id.eq(order_id))).execute(conn)?;

            Ok(order.into())
        })
    }
}
